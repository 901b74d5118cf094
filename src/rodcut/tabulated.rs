//! Bottom-up tabulated solver.
//!
//! # Algorithm
//!
//! For n = 1..=L, scan j = 1..=n and keep the first j maximizing
//! `price(j) + profit[n - j]` (update only on strict improvement).
//! The answer is read off `profit[L]` and the cuts are traced back
//! through the recorded first cuts.
//!
//! # Complexity
//! O(L²) time, O(L) space.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Bottom-up cut-rod)

use log::{debug, trace};

use super::{CutSolver, CutTable};
use crate::error::{Error, Result};
use crate::models::{CutSolution, PriceTable};

/// Iterative bottom-up rod-cutting solver.
///
/// Holds no table state; each [`solve`](CutSolver::solve) call allocates
/// its own tables.
///
/// # Example
///
/// ```
/// use u_rodcut::models::PriceTable;
/// use u_rodcut::rodcut::{CutSolver, TabulatedSolver};
///
/// let prices = PriceTable::new(vec![1, 3, 8]);
/// let solution = TabulatedSolver::new().solve(3, &prices).unwrap();
/// assert_eq!(solution.max_profit, 8);
/// assert_eq!(solution.cuts, vec![3]);
/// assert_eq!(solution.number_of_cuts, 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedSolver;

impl TabulatedSolver {
    /// Creates a solver.
    pub fn new() -> Self {
        Self
    }

    /// Fills the profit and cut tables for every sub-length up to `length`.
    pub fn fill_table(&self, length: usize, prices: &PriceTable) -> Result<CutTable> {
        prices.ensure_covers(length)?;
        let prices = prices.as_slice();
        let mut table = CutTable::with_length(length);

        for n in 1..=length {
            let mut best_profit = 0u64;
            let mut best_cut = 0usize;

            for j in 1..=n {
                let value = prices[j - 1]
                    .checked_add(table.profit_at(n - j))
                    .ok_or(Error::Overflow { length })?;
                if best_cut == 0 || value > best_profit {
                    best_profit = value;
                    best_cut = j;
                }
            }

            trace!("[tabulated] n={n} profit={best_profit} cut={best_cut}");
            table.record(n, best_profit, best_cut);
        }

        Ok(table)
    }
}

impl CutSolver for TabulatedSolver {
    fn name(&self) -> &'static str {
        "tabulated"
    }

    fn solve(&self, length: usize, prices: &PriceTable) -> Result<CutSolution> {
        // Every price table covers length 0.
        if length == 0 {
            return Ok(CutSolution::empty());
        }

        let solution = self.fill_table(length, prices)?.into_solution();
        debug!(
            "[tabulated] length={length} profit={} pieces={}",
            solution.max_profit,
            solution.piece_count()
        );
        Ok(solution)
    }
}
