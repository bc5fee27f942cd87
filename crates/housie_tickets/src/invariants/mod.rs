//! First-class invariants for Housie tickets.
//!
//! Invariants are logical properties every accepted ticket must hold.
//! They are testable independently and serve as documentation of the
//! generator's guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in tests and can be composed into sets.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 5-tuples
impl<S, I1, I2, I3, I4, I5> InvariantSet<S> for (I1, I2, I3, I4, I5)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
    I5: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if !I5::holds(state) {
            violations.push(InvariantViolation::new(I5::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod ascending_columns;
pub mod column_bounds;
pub mod column_count;
pub mod distinct_values;
pub mod row_fill;

pub use ascending_columns::AscendingColumnsInvariant;
pub use column_bounds::ColumnBoundsInvariant;
pub use column_count::ColumnCountInvariant;
pub use distinct_values::DistinctValuesInvariant;
pub use row_fill::RowFillInvariant;

// Ticket invariant set (all structural guarantees)
/// All ticket invariants as a composable set.
pub type TicketInvariants = (
    RowFillInvariant,
    ColumnBoundsInvariant,
    AscendingColumnsInvariant,
    DistinctValuesInvariant,
    ColumnCountInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ticket;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_invariant_set_holds_for_generated_tickets() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..100 {
            let ticket = Ticket::generate_with(&mut rng);
            assert!(TicketInvariants::check_all(&ticket).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut rng = StdRng::seed_from_u64(42);
        let ticket = Ticket::generate_with(&mut rng);

        // Corrupt the ticket: blank out every cell.
        let corrupted = Ticket::from_cells([[0; 9]; 3]);

        let result = TicketInvariants::check_all(&corrupted);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert!(!violations.is_empty());
        assert!(TicketInvariants::check_all(&ticket).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut rng = StdRng::seed_from_u64(43);
        let ticket = Ticket::generate_with(&mut rng);

        type TwoInvariants = (RowFillInvariant, DistinctValuesInvariant);
        assert!(TwoInvariants::check_all(&ticket).is_ok());
    }
}
