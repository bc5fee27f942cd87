//! Core domain types for Housie ticket grids.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Number of rows in a ticket grid.
pub const ROWS: usize = 3;

/// Number of columns in a ticket grid.
pub const COLS: usize = 9;

/// Numbers a complete ticket holds.
pub const TICKET_NUMBERS: usize = 15;

/// Numbers each row holds.
pub const ROW_NUMBERS: usize = 5;

/// Tickets in a strip.
pub const STRIP_TICKETS: usize = 6;

/// Largest strip count a single request may ask for.
pub const MAX_STRIPS: usize = 60;

/// The fixed numeric range backing one grid column.
///
/// The nine ranges partition 1-90 in column order; the last range
/// holds eleven numbers (80-90), the first nine (1-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRange {
    low: u8,
    high: u8,
}

impl ColumnRange {
    /// All nine column ranges in grid order.
    pub const ALL: [ColumnRange; COLS] = [
        ColumnRange { low: 1, high: 9 },
        ColumnRange { low: 10, high: 19 },
        ColumnRange { low: 20, high: 29 },
        ColumnRange { low: 30, high: 39 },
        ColumnRange { low: 40, high: 49 },
        ColumnRange { low: 50, high: 59 },
        ColumnRange { low: 60, high: 69 },
        ColumnRange { low: 70, high: 79 },
        ColumnRange { low: 80, high: 90 },
    ];

    /// Returns the range backing the given column index.
    pub fn of_column(column: usize) -> Option<ColumnRange> {
        Self::ALL.get(column).copied()
    }

    /// Smallest number in the range.
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Largest number in the range.
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Checks whether a number belongs to this range.
    pub fn contains(&self, value: u8) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Number of values in the range.
    pub fn len(&self) -> usize {
        usize::from(self.high - self.low) + 1
    }

    /// Always false; every column range holds at least nine numbers.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All values of the range in ascending order.
    pub fn values(&self) -> Vec<u8> {
        (self.low..=self.high).collect()
    }
}

/// One of the three column groups (0-2, 3-5, 6-8) used for
/// spread-balancing heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Segment {
    /// Columns 0-2.
    Left,
    /// Columns 3-5.
    Middle,
    /// Columns 6-8.
    Right,
}

impl Segment {
    /// Returns the segment containing the given column.
    pub fn of_column(column: usize) -> Segment {
        match column / 3 {
            0 => Segment::Left,
            1 => Segment::Middle,
            _ => Segment::Right,
        }
    }

    /// Segment position within the grid (0-2).
    pub fn index(self) -> usize {
        match self {
            Segment::Left => 0,
            Segment::Middle => 1,
            Segment::Right => 2,
        }
    }

    /// Columns belonging to this segment.
    pub fn columns(self) -> std::ops::Range<usize> {
        let start = self.index() * 3;
        start..start + 3
    }
}

/// Per-column number counts for one ticket.
///
/// A valid assignment has every count in 1..=3 and a total of
/// exactly [`TICKET_NUMBERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCounts([u8; COLS]);

impl ColumnCounts {
    /// Wraps a raw count array.
    pub fn new(counts: [u8; COLS]) -> Self {
        Self(counts)
    }

    /// Count for the given column.
    pub fn get(&self, column: usize) -> Option<u8> {
        self.0.get(column).copied()
    }

    /// Counts as a raw array.
    pub fn as_array(&self) -> &[u8; COLS] {
        &self.0
    }

    /// Sum of all column counts.
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// Sum of counts over one segment's columns.
    pub fn segment_total(&self, segment: Segment) -> u8 {
        segment.columns().map(|c| self.0[c]).sum()
    }

    /// Checks the count invariant: every column in 1..=3, total 15.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|&c| (1..=3).contains(&c))
            && usize::from(self.total()) == TICKET_NUMBERS
    }
}

/// Boolean map of which cells hold a number, decided before values
/// are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Occupancy {
    cells: [[bool; COLS]; ROWS],
}

impl Occupancy {
    /// Creates an empty occupancy matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cell at (row, column) is occupied.
    ///
    /// Out-of-bounds coordinates read as unoccupied.
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Marks the cell at (row, column).
    pub(crate) fn set(&mut self, row: usize, column: usize, occupied: bool) {
        if row < ROWS && column < COLS {
            self.cells[row][column] = occupied;
        }
    }

    /// Number of occupied cells in a row.
    pub fn row_fill(&self, row: usize) -> usize {
        self.cells
            .get(row)
            .map(|r| r.iter().filter(|&&c| c).count())
            .unwrap_or(0)
    }

    /// Number of occupied cells in a column.
    pub fn column_fill(&self, column: usize) -> usize {
        (0..ROWS).filter(|&r| self.get(r, column)).count()
    }

    /// Occupied row indices of a column, top to bottom.
    pub fn column_rows(&self, column: usize) -> Vec<usize> {
        (0..ROWS).filter(|&r| self.get(r, column)).collect()
    }

    /// Checks the occupancy invariant against a count assignment:
    /// every column fill matches its count and every row holds
    /// exactly [`ROW_NUMBERS`] cells.
    pub fn satisfies(&self, counts: &ColumnCounts) -> bool {
        (0..COLS).all(|c| Some(self.column_fill(c) as u8) == counts.get(c))
            && (0..ROWS).all(|r| self.row_fill(r) == ROW_NUMBERS)
    }
}

/// A 3x9 Housie ticket; 0 marks a blank cell.
///
/// Serializes transparently as an array of three rows of nine
/// integers, the wire shape existing consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket {
    cells: [[u8; COLS]; ROWS],
}

impl Ticket {
    /// Builds a ticket from raw cells.
    pub fn from_cells(cells: [[u8; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Value at (row, column); 0 means blank.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// All rows as raw cell arrays.
    pub fn rows(&self) -> &[[u8; COLS]; ROWS] {
        &self.cells
    }

    /// One row as a raw cell array.
    pub fn row(&self, row: usize) -> Option<&[u8; COLS]> {
        self.cells.get(row)
    }

    /// One column, top to bottom.
    pub fn column(&self, column: usize) -> Option<[u8; ROWS]> {
        if column >= COLS {
            return None;
        }
        Some([
            self.cells[0][column],
            self.cells[1][column],
            self.cells[2][column],
        ])
    }

    /// Iterator over the non-blank numbers of the ticket.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .filter(|&v| v != 0)
    }

    /// Formats the ticket as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    result.push_str(" .");
                } else {
                    result.push_str(&format!("{:2}", cell));
                }
                if j < COLS - 1 {
                    result.push(' ');
                }
            }
            if i < ROWS - 1 {
                result.push('\n');
            }
        }
        result
    }
}

/// Six tickets forming one card in this system's terminology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strip {
    tickets: [Ticket; STRIP_TICKETS],
}

impl Strip {
    /// Wraps six tickets into a strip.
    pub fn from_tickets(tickets: [Ticket; STRIP_TICKETS]) -> Self {
        Self { tickets }
    }

    /// The tickets of the strip in order.
    pub fn tickets(&self) -> &[Ticket; STRIP_TICKETS] {
        &self.tickets
    }

    /// Consumes the strip, yielding its tickets.
    pub fn into_tickets(self) -> [Ticket; STRIP_TICKETS] {
        self.tickets
    }
}
