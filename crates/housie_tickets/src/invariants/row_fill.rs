//! Row fill invariant: every row holds exactly five numbers.

use super::Invariant;
use crate::types::{ROW_NUMBERS, Ticket};

/// Invariant: each of the three rows has exactly five non-blank cells.
pub struct RowFillInvariant;

impl Invariant<Ticket> for RowFillInvariant {
    fn holds(ticket: &Ticket) -> bool {
        ticket
            .rows()
            .iter()
            .all(|row| row.iter().filter(|&&v| v != 0).count() == ROW_NUMBERS)
    }

    fn description() -> &'static str {
        "Every row holds exactly five numbers"
    }
}
