//! Rod-cutting dynamic programming.
//!
//! Given a rod of integer length L and a price per piece length, find the
//! cuts that maximize total revenue:
//!
//! ```text
//! profit(0) = 0
//! profit(n) = max_{1 <= c <= n} price(c) + profit(n - c)
//! ```
//!
//! Two interchangeable strategies fill the same [`CutTable`]:
//!
//! | Strategy | Type | Order |
//! |----------|------|-------|
//! | Memoized | [`MemoizedSolver`] | top-down, memoized |
//! | Tabulated | [`TabulatedSolver`] | bottom-up loop |
//!
//! # Tie-breaking
//!
//! Candidate cuts are scanned in ascending order and the running best is
//! replaced only on a strict improvement, so the smallest first cut
//! achieving the optimum wins. Both strategies use the same rule and
//! therefore reconstruct identical cut sequences.
//!
//! # Usage
//!
//! ```
//! use u_rodcut::models::PriceTable;
//! use u_rodcut::rodcut::{solve_memo, solve_table};
//!
//! let prices = PriceTable::new(vec![2, 5, 7, 8, 10]);
//! let memo = solve_memo(5, &prices).unwrap();
//! let table = solve_table(5, &prices).unwrap();
//!
//! assert_eq!(memo.max_profit, 12);
//! assert_eq!(memo.cuts, vec![1, 2, 2]);
//! assert_eq!(memo, table);
//! ```
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1

mod cutter;
pub mod generate;
mod memoized;
mod table;
mod tabulated;

pub use cutter::{CutStrategy, RodCutter};
pub use memoized::MemoizedSolver;
pub use table::CutTable;
pub use tabulated::TabulatedSolver;

use crate::error::Result;
use crate::models::{CutSolution, PriceTable};
use std::fmt::Debug;

/// A rod-cutting strategy.
///
/// Implementations hold no per-call state, so one instance can serve
/// concurrent callers.
pub trait CutSolver: Send + Sync + Debug {
    /// Strategy name (e.g., "memoized").
    fn name(&self) -> &'static str;

    /// Finds the maximum revenue for a rod of `length` and one optimal cut sequence.
    ///
    /// # Errors
    /// - [`Error::MissingPrice`](crate::Error::MissingPrice) if `prices` is shorter than `length`.
    /// - [`Error::Overflow`](crate::Error::Overflow) if a profit exceeds `u64`.
    fn solve(&self, length: usize, prices: &PriceTable) -> Result<CutSolution>;
}

/// Solves with the top-down memoized strategy.
pub fn solve_memo(length: usize, prices: &PriceTable) -> Result<CutSolution> {
    MemoizedSolver::new().solve(length, prices)
}

/// Solves with the bottom-up tabulated strategy.
pub fn solve_table(length: usize, prices: &PriceTable) -> Result<CutSolution> {
    TabulatedSolver::new().solve(length, prices)
}
