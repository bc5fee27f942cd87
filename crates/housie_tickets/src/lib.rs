//! Housie ticket library - constrained 3x9 grid generation
//!
//! This library produces valid Housie/Tambola ticket layouts: 3x9
//! grids of 15 numbers drawn from fixed per-column ranges, six grids
//! to a strip.
//!
//! # Architecture
//!
//! - **Pools**: per-column shuffled number pools, drawn without replacement
//! - **Layout**: per-column counts and row occupancy, balanced by segment
//! - **Fill**: numbers sorted ascending into the occupied cells
//! - **Invariants**: first-class, independently testable structural guarantees
//!
//! # Example
//!
//! ```
//! use housie_tickets::{InvariantSet, TicketInvariants};
//!
//! let tickets = housie_tickets::generate_cards(2);
//! assert_eq!(tickets.len(), 12);
//! for ticket in &tickets {
//!     assert!(TicketInvariants::check_all(ticket).is_ok());
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod fill;
mod generator;
mod layout;
mod pools;
mod types;

// Public module declarations
pub mod invariants;

// Crate-level exports - generation
pub use generator::{generate_cards, generate_cards_with};

// Crate-level exports - pools
pub use pools::{ColumnPools, ExhaustedPool};

// Crate-level exports - domain types
pub use types::{
    COLS, ColumnCounts, ColumnRange, MAX_STRIPS, Occupancy, ROW_NUMBERS, ROWS, STRIP_TICKETS,
    Segment, Strip, TICKET_NUMBERS, Ticket,
};

// Crate-level exports - invariants
pub use invariants::{
    AscendingColumnsInvariant, ColumnBoundsInvariant, ColumnCountInvariant,
    DistinctValuesInvariant, Invariant, InvariantSet, InvariantViolation, RowFillInvariant,
    TicketInvariants,
};
