//! Column bounds invariant: values stay inside their column's range.

use super::Invariant;
use crate::types::{COLS, ColumnRange, Ticket};

/// Invariant: every non-blank value lies within the fixed numeric
/// range of its column (1-9, 10-19, ..., 80-90).
pub struct ColumnBoundsInvariant;

impl Invariant<Ticket> for ColumnBoundsInvariant {
    fn holds(ticket: &Ticket) -> bool {
        (0..COLS).all(|column| {
            let range = ColumnRange::ALL[column];
            ticket
                .column(column)
                .is_some_and(|cells| cells.iter().all(|&v| v == 0 || range.contains(v)))
        })
    }

    fn description() -> &'static str {
        "Every value lies within its column's fixed range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_value_violates() {
        let mut cells = [[0u8; 9]; 3];
        // 45 belongs to column 4, not column 0.
        cells[0][0] = 45;
        let ticket = Ticket::from_cells(cells);
        assert!(!ColumnBoundsInvariant::holds(&ticket));
    }

    #[test]
    fn test_boundary_values_hold() {
        let mut cells = [[0u8; 9]; 3];
        cells[0][0] = 1;
        cells[1][0] = 9;
        cells[0][8] = 80;
        cells[1][8] = 90;
        let ticket = Ticket::from_cells(cells);
        assert!(ColumnBoundsInvariant::holds(&ticket));
    }
}
