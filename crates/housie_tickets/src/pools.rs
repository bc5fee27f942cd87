//! Shuffled per-column number pools for ticket filling.

use crate::types::{COLS, ColumnRange};
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// A column pool ran out of numbers.
///
/// Structurally unreachable in correct use: every column range holds
/// at least nine numbers and no column count exceeds three. Carried so
/// that misuse fails with context instead of panicking in the filler.
#[derive(Debug, Clone, Display, Error)]
#[display("column {column} pool exhausted: requested {requested}, remaining {remaining}")]
pub struct ExhaustedPool {
    /// Column whose pool underflowed.
    pub column: usize,
    /// Numbers requested from the pool.
    pub requested: usize,
    /// Numbers remaining in the pool.
    pub remaining: usize,
}

/// Nine independent shuffled number pools, one per column range.
///
/// Each pool is a random permutation of its fixed range; draws remove
/// numbers so a single ticket can never repeat a value. A fresh set of
/// pools is built per ticket.
#[derive(Debug, Clone)]
pub struct ColumnPools {
    pools: [Vec<u8>; COLS],
}

impl ColumnPools {
    /// Builds freshly shuffled pools over the fixed column ranges.
    #[instrument(skip(rng))]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let pools = ColumnRange::ALL.map(|range| {
            let mut pool = range.values();
            pool.shuffle(rng);
            pool
        });
        Self { pools }
    }

    /// Numbers remaining in the given column's pool.
    pub fn remaining(&self, column: usize) -> usize {
        self.pools.get(column).map(Vec::len).unwrap_or(0)
    }

    /// Draws `count` distinct numbers from a column's pool, removing
    /// them from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedPool`] if the column index is out of range or
    /// the pool holds fewer than `count` numbers.
    pub fn take(&mut self, column: usize, count: usize) -> Result<Vec<u8>, ExhaustedPool> {
        let pool = self.pools.get_mut(column).ok_or(ExhaustedPool {
            column,
            requested: count,
            remaining: 0,
        })?;
        if pool.len() < count {
            return Err(ExhaustedPool {
                column,
                requested: count,
                remaining: pool.len(),
            });
        }
        Ok(pool.split_off(pool.len() - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnRange;

    #[test]
    fn test_pools_cover_their_ranges() {
        let mut rng = rand::rng();
        let pools = ColumnPools::shuffled(&mut rng);
        for (column, range) in ColumnRange::ALL.iter().enumerate() {
            assert_eq!(pools.remaining(column), range.len());
        }
    }

    #[test]
    fn test_take_draws_distinct_in_range_values() {
        let mut rng = rand::rng();
        let mut pools = ColumnPools::shuffled(&mut rng);
        let drawn = pools.take(4, 3).unwrap();
        assert_eq!(drawn.len(), 3);
        for &value in &drawn {
            assert!(ColumnRange::ALL[4].contains(value));
        }
        let mut unique = drawn.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 3);
        assert_eq!(pools.remaining(4), ColumnRange::ALL[4].len() - 3);
    }

    #[test]
    fn test_repeated_takes_never_repeat() {
        let mut rng = rand::rng();
        let mut pools = ColumnPools::shuffled(&mut rng);
        let first = pools.take(0, 3).unwrap();
        let second = pools.take(0, 3).unwrap();
        for value in &second {
            assert!(!first.contains(value));
        }
    }

    #[test]
    fn test_take_exhaustion_reports_context() {
        let mut rng = rand::rng();
        let mut pools = ColumnPools::shuffled(&mut rng);
        let err = pools.take(0, 10).unwrap_err();
        assert_eq!(err.column, 0);
        assert_eq!(err.requested, 10);
        assert_eq!(err.remaining, 9);
    }

    #[test]
    fn test_take_unknown_column_errors() {
        let mut rng = rand::rng();
        let mut pools = ColumnPools::shuffled(&mut rng);
        assert!(pools.take(9, 1).is_err());
    }
}
