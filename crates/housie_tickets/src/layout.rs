//! Layout planning: per-column counts and row occupancy for one ticket.
//!
//! The planner decides how many numbers each of the nine columns
//! receives (1-3, totalling 15) and which rows hold them (every row
//! ends at exactly 5). The primary policy balances counts across the
//! three column segments; a bounded retry loop discards inconsistent
//! attempts and falls through to a greedy planner that cannot dead-end.

use crate::types::{COLS, ColumnCounts, Occupancy, ROW_NUMBERS, ROWS, Segment, TICKET_NUMBERS};
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Randomized attempts at the balanced assignment before the fallback
/// planner takes over.
const PLAN_ATTEMPTS: usize = 40;

/// Plans a valid (counts, occupancy) pair for one ticket.
///
/// Never returns an assignment violating the ticket invariants:
/// inconsistent attempts are discarded internally, and the fallback
/// planner's output passes the same validation as the primary path.
#[instrument(skip(rng))]
pub(crate) fn plan_layout<R: Rng + ?Sized>(rng: &mut R) -> (ColumnCounts, Occupancy) {
    let counts = balanced_counts(rng);
    for attempt in 0..PLAN_ATTEMPTS {
        if let Some(occupancy) = resolve_occupancy(&counts, rng) {
            return (counts, occupancy);
        }
        debug!(attempt, "occupancy attempt discarded");
    }

    debug!("balanced attempts exhausted, switching to fallback planner");
    fallback_layout(rng)
}

/// Assigns column counts balanced by segment.
///
/// Every column starts at 1. The segments are shuffled; two receive a
/// single +2 on a random column (a 3,1,1 shape) and the third receives
/// +1 on two distinct random columns (a 2,2,1 shape), so each segment
/// totals exactly five numbers and the grid totals fifteen.
fn balanced_counts<R: Rng + ?Sized>(rng: &mut R) -> ColumnCounts {
    let mut counts = [1u8; COLS];
    let mut segments: Vec<Segment> = Segment::iter().collect();
    segments.shuffle(rng);

    for (i, segment) in segments.iter().enumerate() {
        let columns: Vec<usize> = segment.columns().collect();
        if i < 2 {
            let pick = columns[rng.random_range(0..columns.len())];
            counts[pick] += 2;
        } else {
            let mut picks = columns;
            picks.shuffle(rng);
            counts[picks[0]] += 1;
            counts[picks[1]] += 1;
        }
    }

    ColumnCounts::new(counts)
}

/// One attempt at resolving row occupancy for the given counts.
///
/// Columns are processed in descending count order so the most
/// constrained land first. Returns `None` if the attempt dead-ends or
/// fails validation; the caller retries.
fn resolve_occupancy<R: Rng + ?Sized>(
    counts: &ColumnCounts,
    rng: &mut R,
) -> Option<Occupancy> {
    let mut occupancy = Occupancy::new();
    let mut row_used = [0usize; ROWS];
    // Rows already holding a number within each segment.
    let mut segment_rows = [[false; ROWS]; 3];

    let mut order: Vec<usize> = (0..COLS).collect();
    order.sort_by_key(|&c| Reverse(counts.get(c)));

    for &column in &order {
        let need = usize::from(counts.get(column)?);
        let segment = Segment::of_column(column).index();
        match need {
            3 => {
                for row in 0..ROWS {
                    occupancy.set(row, column, true);
                    row_used[row] += 1;
                    segment_rows[segment][row] = true;
                }
            }
            2 => {
                let ranked = ranked_rows(&row_used, &segment_rows[segment], rng);
                let chosen: Vec<usize> = ranked
                    .into_iter()
                    .filter(|&r| row_used[r] < ROW_NUMBERS)
                    .take(2)
                    .collect();
                if chosen.len() < 2 {
                    return None;
                }
                for row in chosen {
                    occupancy.set(row, column, true);
                    row_used[row] += 1;
                    segment_rows[segment][row] = true;
                }
            }
            _ => {
                let ranked = ranked_rows(&row_used, &segment_rows[segment], rng);
                let row = ranked
                    .iter()
                    .copied()
                    .find(|&r| row_used[r] < ROW_NUMBERS && !segment_rows[segment][r])
                    .or_else(|| {
                        ranked
                            .iter()
                            .copied()
                            .find(|&r| row_used[r] < ROW_NUMBERS)
                    })
                    // Globally least-used row; validation rejects the
                    // attempt if this overfills.
                    .unwrap_or(ranked[0]);
                occupancy.set(row, column, true);
                row_used[row] += 1;
                segment_rows[segment][row] = true;
            }
        }
    }

    // Top up rows still under five from columns with spare capacity.
    for row in 0..ROWS {
        while row_used[row] < ROW_NUMBERS {
            let candidates: Vec<usize> = (0..COLS)
                .filter(|&c| {
                    !occupancy.get(row, c)
                        && counts
                            .get(c)
                            .is_some_and(|count| occupancy.column_fill(c) < usize::from(count))
                })
                .collect();
            if candidates.is_empty() {
                return None;
            }
            let column = candidates[rng.random_range(0..candidates.len())];
            occupancy.set(row, column, true);
            row_used[row] += 1;
        }
    }

    occupancy.satisfies(counts).then_some(occupancy)
}

/// Rows ordered by fewest numbers placed so far, preferring rows not
/// yet represented in the column's segment, remaining ties random.
fn ranked_rows<R: Rng + ?Sized>(
    row_used: &[usize; ROWS],
    represented: &[bool; ROWS],
    rng: &mut R,
) -> [usize; ROWS] {
    let jitter: [u32; ROWS] = [rng.random(), rng.random(), rng.random()];
    let mut rows = [0, 1, 2];
    rows.sort_by_key(|&r| (row_used[r], represented[r], jitter[r]));
    rows
}

/// Guaranteed-terminating fallback planner.
///
/// Counts come from uniform random column increments; occupancy from a
/// greedy fill that hands each column (most constrained first) to the
/// rows with the most remaining capacity, which cannot dead-end for
/// these count shapes. The result is still validated, never assumed.
fn fallback_layout<R: Rng + ?Sized>(rng: &mut R) -> (ColumnCounts, Occupancy) {
    loop {
        let counts = uniform_counts(rng);
        if let Some(occupancy) = greedy_occupancy(&counts, rng) {
            return (counts, occupancy);
        }
        debug!("fallback attempt produced an invalid layout, retrying");
    }
}

/// Distributes the six extra numbers over uniformly random columns,
/// rejecting increments past three.
fn uniform_counts<R: Rng + ?Sized>(rng: &mut R) -> ColumnCounts {
    let mut counts = [1u8; COLS];
    let mut extras = TICKET_NUMBERS - COLS;
    while extras > 0 {
        let column = rng.random_range(0..COLS);
        if counts[column] < 3 {
            counts[column] += 1;
            extras -= 1;
        }
    }
    ColumnCounts::new(counts)
}

/// Greedy occupancy: each column takes the rows with the most
/// remaining capacity, ties broken randomly.
fn greedy_occupancy<R: Rng + ?Sized>(
    counts: &ColumnCounts,
    rng: &mut R,
) -> Option<Occupancy> {
    let mut occupancy = Occupancy::new();
    let mut row_left = [ROW_NUMBERS; ROWS];

    let mut order: Vec<usize> = (0..COLS).collect();
    order.sort_by_key(|&c| Reverse(counts.get(c)));

    for &column in &order {
        let need = usize::from(counts.get(column)?);
        let jitter: [u32; ROWS] = [rng.random(), rng.random(), rng.random()];
        let mut rows = [0, 1, 2];
        rows.sort_by_key(|&r| (Reverse(row_left[r]), jitter[r]));
        let chosen: Vec<usize> = rows
            .into_iter()
            .filter(|&r| row_left[r] > 0)
            .take(need)
            .collect();
        if chosen.len() < need {
            return None;
        }
        for row in chosen {
            occupancy.set(row, column, true);
            row_left[row] -= 1;
        }
    }

    occupancy.satisfies(counts).then_some(occupancy)
}
