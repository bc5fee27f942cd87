//! Column count invariant: one to three numbers per column, fifteen total.

use super::Invariant;
use crate::types::{COLS, TICKET_NUMBERS, Ticket};

/// Invariant: every column holds between one and three numbers and the
/// whole ticket holds exactly fifteen.
pub struct ColumnCountInvariant;

impl Invariant<Ticket> for ColumnCountInvariant {
    fn holds(ticket: &Ticket) -> bool {
        let mut total = 0;
        for column in 0..COLS {
            let count = ticket
                .column(column)
                .map(|cells| cells.iter().filter(|&&v| v != 0).count())
                .unwrap_or(0);
            if !(1..=3).contains(&count) {
                return false;
            }
            total += count;
        }
        total == TICKET_NUMBERS
    }

    fn description() -> &'static str {
        "Every column holds 1-3 numbers, 15 per ticket"
    }
}
