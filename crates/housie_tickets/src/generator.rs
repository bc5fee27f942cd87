//! Ticket, strip, and card-batch generation.

use crate::fill::fill_ticket;
use crate::layout::plan_layout;
use crate::pools::ColumnPools;
use crate::types::{MAX_STRIPS, STRIP_TICKETS, Strip, Ticket};
use rand::Rng;
use tracing::{debug, info, instrument};

impl Ticket {
    /// Generates one valid ticket from the process RNG.
    pub fn generate() -> Ticket {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates one valid ticket from the given RNG.
    ///
    /// Seeded RNGs make generation reproducible in tests; production
    /// callers use [`Ticket::generate`].
    #[instrument(skip(rng))]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Ticket {
        let mut pools = ColumnPools::shuffled(rng);
        let (counts, occupancy) = plan_layout(rng);
        // The planner never assigns a column more numbers than its
        // range holds (minimum range size is nine, maximum count three).
        fill_ticket(&counts, &occupancy, &mut pools)
            .expect("column counts never exceed pool size")
    }
}

impl Strip {
    /// Generates a strip of six independent tickets.
    ///
    /// Each ticket draws from its own freshly shuffled pools; the six
    /// tickets of a strip do not jointly partition 1-90.
    pub fn generate() -> Strip {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates a strip of six independent tickets from the given RNG.
    #[instrument(skip(rng))]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Strip {
        Strip::from_tickets(std::array::from_fn(|_| Ticket::generate_with(rng)))
    }
}

/// Generates `count` strips' worth of tickets, concatenated in order.
///
/// The strip count is silently clamped to `1..=60` rather than
/// rejected, so the operation always succeeds; the bound keeps a
/// single response from growing past 360 tickets.
pub fn generate_cards(count: usize) -> Vec<Ticket> {
    generate_cards_with(count, &mut rand::rng())
}

/// Generates `count` clamped strips' worth of tickets from the given RNG.
#[instrument(skip(rng))]
pub fn generate_cards_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Ticket> {
    let strips = count.clamp(1, MAX_STRIPS);
    if strips != count {
        debug!(requested = count, clamped = strips, "strip count clamped");
    }
    let mut tickets = Vec::with_capacity(strips * STRIP_TICKETS);
    for _ in 0..strips {
        tickets.extend(Strip::generate_with(rng).into_tickets());
    }
    info!(strips, tickets = tickets.len(), "generated cards");
    tickets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_strip_holds_six_tickets() {
        let mut rng = StdRng::seed_from_u64(31);
        let strip = Strip::generate_with(&mut rng);
        assert_eq!(strip.tickets().len(), STRIP_TICKETS);
    }

    #[test]
    fn test_generate_cards_counts() {
        let mut rng = StdRng::seed_from_u64(32);
        assert_eq!(generate_cards_with(1, &mut rng).len(), 6);
        assert_eq!(generate_cards_with(3, &mut rng).len(), 18);
    }

    #[test]
    fn test_generate_cards_clamps() {
        let mut rng = StdRng::seed_from_u64(33);
        assert_eq!(generate_cards_with(0, &mut rng).len(), 6);
        assert_eq!(generate_cards_with(1000, &mut rng).len(), 360);
    }
}
