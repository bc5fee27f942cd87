//! Column ordering invariant: values ascend top-to-bottom.

use super::Invariant;
use crate::types::{COLS, Ticket};

/// Invariant: within each column, non-blank values strictly increase
/// from row 0 to row 2.
pub struct AscendingColumnsInvariant;

impl Invariant<Ticket> for AscendingColumnsInvariant {
    fn holds(ticket: &Ticket) -> bool {
        (0..COLS).all(|column| {
            let values: Vec<u8> = ticket
                .column(column)
                .map(|cells| cells.into_iter().filter(|&v| v != 0).collect())
                .unwrap_or_default();
            values.windows(2).all(|w| w[0] < w[1])
        })
    }

    fn description() -> &'static str {
        "Column values strictly increase top to bottom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_column_violates() {
        let mut cells = [[0u8; 9]; 3];
        cells[0][3] = 39;
        cells[2][3] = 30;
        let descending = Ticket::from_cells(cells);
        assert!(!AscendingColumnsInvariant::holds(&descending));

        cells[0][3] = 30;
        cells[2][3] = 39;
        let ascending = Ticket::from_cells(cells);
        assert!(AscendingColumnsInvariant::holds(&ascending));
    }

    #[test]
    fn test_equal_values_violate() {
        let mut cells = [[0u8; 9]; 3];
        cells[0][3] = 33;
        cells[1][3] = 33;
        let ticket = Ticket::from_cells(cells);
        assert!(!AscendingColumnsInvariant::holds(&ticket));
    }

    #[test]
    fn test_gap_between_rows_holds() {
        // Blank middle cell does not break the ordering check.
        let mut cells = [[0u8; 9]; 3];
        cells[0][3] = 31;
        cells[2][3] = 38;
        let ticket = Ticket::from_cells(cells);
        assert!(AscendingColumnsInvariant::holds(&ticket));
    }
}
