//! Tests for ticket structural invariants over generated output.

use housie_tickets::{
    AscendingColumnsInvariant, ColumnBoundsInvariant, ColumnCountInvariant,
    DistinctValuesInvariant, Invariant, InvariantSet, RowFillInvariant, Strip, Ticket,
    TicketInvariants,
};

#[test]
fn test_generated_tickets_satisfy_all_invariants() {
    for _ in 0..1000 {
        let ticket = Ticket::generate();
        if let Err(violations) = TicketInvariants::check_all(&ticket) {
            panic!(
                "invalid ticket:\n{}\nviolations: {:?}",
                ticket.display(),
                violations
            );
        }
    }
}

#[test]
fn test_generated_strips_satisfy_all_invariants() {
    for _ in 0..50 {
        let strip = Strip::generate();
        for ticket in strip.tickets() {
            assert!(TicketInvariants::check_all(ticket).is_ok());
        }
    }
}

#[test]
fn test_each_invariant_holds_individually() {
    let ticket = Ticket::generate();
    assert!(RowFillInvariant::holds(&ticket));
    assert!(ColumnBoundsInvariant::holds(&ticket));
    assert!(AscendingColumnsInvariant::holds(&ticket));
    assert!(DistinctValuesInvariant::holds(&ticket));
    assert!(ColumnCountInvariant::holds(&ticket));
}

#[test]
fn test_corrupted_ticket_reports_violations() {
    let ticket = Ticket::generate();
    let mut cells = *ticket.rows();

    // Swap a value into the wrong column and duplicate it.
    cells[0][0] = 45;
    cells[1][4] = 45;

    let corrupted = Ticket::from_cells(cells);
    let violations = TicketInvariants::check_all(&corrupted).unwrap_err();
    assert!(!violations.is_empty());
}

#[test]
fn test_blank_ticket_violates_everything_structural() {
    let blank = Ticket::from_cells([[0; 9]; 3]);
    assert!(!RowFillInvariant::holds(&blank));
    assert!(!ColumnCountInvariant::holds(&blank));
    // Vacuously true: no values to bound, order, or repeat.
    assert!(ColumnBoundsInvariant::holds(&blank));
    assert!(AscendingColumnsInvariant::holds(&blank));
    assert!(DistinctValuesInvariant::holds(&blank));
}
