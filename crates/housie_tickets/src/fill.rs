//! Grid filling: drawing numbers into a planned occupancy matrix.

use crate::pools::{ColumnPools, ExhaustedPool};
use crate::types::{COLS, ColumnCounts, Occupancy, ROWS, Ticket};
use tracing::instrument;

/// Fills a planned layout with numbers from the column pools.
///
/// For each column the planned count of numbers is drawn, sorted
/// ascending, and written top-to-bottom into the occupied cells, so
/// values within a column strictly increase from row 0 to row 2.
///
/// # Errors
///
/// Returns [`ExhaustedPool`] if a pool cannot cover its column count;
/// structurally impossible for layouts produced by the planner.
#[instrument(skip(pools))]
pub(crate) fn fill_ticket(
    counts: &ColumnCounts,
    occupancy: &Occupancy,
    pools: &mut ColumnPools,
) -> Result<Ticket, ExhaustedPool> {
    let mut cells = [[0u8; COLS]; ROWS];
    for column in 0..COLS {
        let count = usize::from(counts.get(column).unwrap_or(0));
        let mut drawn = pools.take(column, count)?;
        drawn.sort_unstable();
        for (value, row) in drawn.into_iter().zip(occupancy.column_rows(column)) {
            cells[row][column] = value;
        }
    }
    Ok(Ticket::from_cells(cells))
}
