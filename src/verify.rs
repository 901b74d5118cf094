//! Solution verification for rod cutting.
//!
//! Checks a [`CutSolution`] against its input without re-running the DP:
//! - Every piece is a positive length
//! - Pieces sum to the rod length
//! - Re-pricing the pieces reproduces `max_profit`
//! - `number_of_cuts` equals pieces minus one
//!
//! Also provides an exhaustive reference solver for small rods and a
//! cross-check running both strategies on the same input.

use crate::error::{Error, Result};
use crate::models::{CutSolution, PriceTable};
use crate::rodcut::{solve_memo, solve_table};

/// Longest rod [`brute_force_profit`] accepts. It enumerates 2^(L-1) compositions.
pub const BRUTE_FORCE_MAX_LENGTH: usize = 20;

/// Verification result.
pub type VerificationResult = std::result::Result<(), Vec<SolutionIssue>>;

/// A problem found in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionIssue {
    /// Issue category.
    pub kind: SolutionIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of solution issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionIssueKind {
    /// A piece has length 0.
    NonPositiveCut,
    /// Pieces do not sum to the rod length.
    LengthMismatch,
    /// A piece has no price, or re-pricing overflows.
    UnpricedCut,
    /// Re-priced pieces do not equal `max_profit`.
    ProfitMismatch,
    /// `number_of_cuts` is not pieces minus one.
    CutCountMismatch,
    /// The two strategies returned different results.
    StrategyDisagreement,
}

impl SolutionIssue {
    fn new(kind: SolutionIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks the structural invariants of a solution.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(issues)` with every detected issue.
pub fn check_solution(
    length: usize,
    prices: &PriceTable,
    solution: &CutSolution,
) -> VerificationResult {
    let mut issues = Vec::new();

    if let Some(pos) = solution.cuts.iter().position(|&c| c == 0) {
        issues.push(SolutionIssue::new(
            SolutionIssueKind::NonPositiveCut,
            format!("Piece #{pos} has length 0"),
        ));
    }

    let total = solution.total_length();
    if total != length {
        issues.push(SolutionIssue::new(
            SolutionIssueKind::LengthMismatch,
            format!("Pieces sum to {total}, rod length is {length}"),
        ));
    }

    match prices.revenue(&solution.cuts) {
        Some(revenue) if revenue != solution.max_profit => {
            issues.push(SolutionIssue::new(
                SolutionIssueKind::ProfitMismatch,
                format!(
                    "Pieces earn {revenue}, solution reports {}",
                    solution.max_profit
                ),
            ));
        }
        Some(_) => {}
        None => {
            issues.push(SolutionIssue::new(
                SolutionIssueKind::UnpricedCut,
                "Pieces cannot be priced from the table",
            ));
        }
    }

    let expected = solution.cuts.len().saturating_sub(1);
    if solution.number_of_cuts != expected {
        issues.push(SolutionIssue::new(
            SolutionIssueKind::CutCountMismatch,
            format!(
                "number_of_cuts is {}, expected {expected} for {} piece(s)",
                solution.number_of_cuts,
                solution.cuts.len()
            ),
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Maximum revenue by exhaustive enumeration of all compositions of `length`.
///
/// Independent of the DP tables; exponential, so limited to
/// [`BRUTE_FORCE_MAX_LENGTH`].
pub fn brute_force_profit(length: usize, prices: &PriceTable) -> Result<u64> {
    if length > BRUTE_FORCE_MAX_LENGTH {
        return Err(Error::LengthLimitExceeded {
            length,
            limit: BRUTE_FORCE_MAX_LENGTH,
        });
    }
    prices.ensure_covers(length)?;
    enumerate(length, prices.as_slice())
}

fn enumerate(remaining: usize, prices: &[u64]) -> Result<u64> {
    let mut best = 0u64;
    for first in 1..=remaining {
        let rest = enumerate(remaining - first, prices)?;
        let value = prices[first - 1]
            .checked_add(rest)
            .ok_or(Error::Overflow { length: remaining })?;
        best = best.max(value);
    }
    Ok(best)
}

/// Outcome of running both strategies on one input.
#[derive(Debug, Clone)]
pub struct CrossCheck {
    /// Result of the memoized strategy.
    pub memoized: CutSolution,
    /// Result of the tabulated strategy.
    pub tabulated: CutSolution,
    /// Invariant violations and disagreements found.
    pub issues: Vec<SolutionIssue>,
}

impl CrossCheck {
    /// Whether both solutions are valid and identical.
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Solves with both strategies and compares them.
///
/// Solver errors (missing prices, overflow) are returned as `Err`; a
/// successful run reports any invariant violation or disagreement in
/// [`CrossCheck::issues`].
pub fn cross_check(length: usize, prices: &PriceTable) -> Result<CrossCheck> {
    let memoized = solve_memo(length, prices)?;
    let tabulated = solve_table(length, prices)?;

    let mut issues = Vec::new();
    for solution in [&memoized, &tabulated] {
        if let Err(found) = check_solution(length, prices, solution) {
            issues.extend(found);
        }
    }

    if memoized.max_profit != tabulated.max_profit {
        issues.push(SolutionIssue::new(
            SolutionIssueKind::StrategyDisagreement,
            format!(
                "Memoized profit {} differs from tabulated profit {}",
                memoized.max_profit, tabulated.max_profit
            ),
        ));
    }
    if memoized.cuts != tabulated.cuts {
        issues.push(SolutionIssue::new(
            SolutionIssueKind::StrategyDisagreement,
            format!(
                "Memoized cuts {:?} differ from tabulated cuts {:?}",
                memoized.cuts, tabulated.cuts
            ),
        ));
    }

    Ok(CrossCheck {
        memoized,
        tabulated,
        issues,
    })
}
