//! Strategy-selecting entry point.

use serde::{Deserialize, Serialize};

use super::{CutSolver, MemoizedSolver, TabulatedSolver};
use crate::error::{Error, Result};
use crate::models::{CutRequest, CutSolution, PriceTable};

/// Which computation strategy to use.
///
/// Both produce the same profit and the same cut sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutStrategy {
    /// Bottom-up table fill. No recursion.
    #[default]
    Tabulated,
    /// Top-down evaluation with a memo, on an explicit frame stack.
    Memoized,
}

impl CutStrategy {
    /// The solver implementing this strategy.
    pub fn solver(self) -> &'static dyn CutSolver {
        match self {
            CutStrategy::Tabulated => &TabulatedSolver,
            CutStrategy::Memoized => &MemoizedSolver,
        }
    }
}

/// Configurable rod-cutting front end.
///
/// # Example
///
/// ```
/// use u_rodcut::models::PriceTable;
/// use u_rodcut::rodcut::{CutStrategy, RodCutter};
///
/// let cutter = RodCutter::new()
///     .with_strategy(CutStrategy::Memoized)
///     .with_max_length(1_000);
///
/// let solution = cutter.solve(5, &PriceTable::new(vec![2, 5, 7, 8, 10])).unwrap();
/// assert_eq!(solution.max_profit, 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RodCutter {
    strategy: CutStrategy,
    max_length: Option<usize>,
}

impl RodCutter {
    /// Creates a cutter using the tabulated strategy with no length limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the computation strategy.
    pub fn with_strategy(mut self, strategy: CutStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Rejects rods longer than `max_length`.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// The configured strategy.
    pub fn strategy(&self) -> CutStrategy {
        self.strategy
    }

    /// Solves for a rod of `length` with the configured strategy.
    pub fn solve(&self, length: usize, prices: &PriceTable) -> Result<CutSolution> {
        if let Some(limit) = self.max_length {
            if length > limit {
                return Err(Error::LengthLimitExceeded { length, limit });
            }
        }
        self.strategy.solver().solve(length, prices)
    }

    /// Validates a raw request, then solves it.
    pub fn solve_request(&self, request: &CutRequest) -> Result<CutSolution> {
        let (length, prices) = request.validate()?;
        self.solve(length, &prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tabulated() {
        let cutter = RodCutter::new();
        assert_eq!(cutter.strategy(), CutStrategy::Tabulated);
        assert_eq!(cutter.strategy().solver().name(), "tabulated");
        assert_eq!(CutStrategy::Memoized.solver().name(), "memoized");
    }

    #[test]
    fn test_strategies_agree() {
        let prices = PriceTable::new(vec![2, 5, 7, 8, 10]);
        let memo = RodCutter::new()
            .with_strategy(CutStrategy::Memoized)
            .solve(5, &prices)
            .unwrap();
        let table = RodCutter::new().solve(5, &prices).unwrap();
        assert_eq!(memo, table);
    }

    #[test]
    fn test_max_length() {
        let cutter = RodCutter::new().with_max_length(3);
        let prices = PriceTable::new(vec![1, 2, 3, 4]);
        assert!(cutter.solve(3, &prices).is_ok());
        assert_eq!(
            cutter.solve(4, &prices).unwrap_err(),
            Error::LengthLimitExceeded {
                length: 4,
                limit: 3
            }
        );
    }

    #[test]
    fn test_solve_request() {
        let cutter = RodCutter::new();
        let s = cutter
            .solve_request(&CutRequest::new(3, vec![1, 3, 8]))
            .unwrap();
        assert_eq!(s.cuts, vec![3]);

        let err = cutter
            .solve_request(&CutRequest::new(-3, vec![1, 3, 8]))
            .unwrap_err();
        assert_eq!(err, Error::NegativeLength(-3));
    }
}
