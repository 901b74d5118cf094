//! Top-down memoized solver.
//!
//! # Algorithm
//!
//! `best(n)` is the pair `(profit, first_cut)` for a rod of length n:
//! - `best(0) = (0, 0)`
//! - `best(n)`: scan c = 1..=n ascending, take `price(c) + best(n - c).profit`,
//!   keep the first c with a strict improvement.
//!
//! Profit and cut come from the same scan and are memoized together, so
//! the reconstructed cuts always agree with the reported profit.
//!
//! Sub-problems are evaluated on demand from `best(L)` downwards, but the
//! pending calls live on an explicit heap-allocated stack of frames rather
//! than the call stack, so long rods cannot overflow the thread stack.
//!
//! # Complexity
//! O(L²) time, O(L) space.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Memoized cut-rod)

use log::{debug, trace};

use super::{CutSolver, CutTable};
use crate::error::{Error, Result};
use crate::models::{CutSolution, PriceTable};

/// Top-down memoized rod-cutting solver.
///
/// The memo lives in a per-call [`Memo`] and is dropped once the solution
/// is extracted, so calls with different price tables never share entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedSolver;

/// A suspended `best(n)` evaluation: the scan resumes at `next_cut`.
struct Frame {
    n: usize,
    next_cut: usize,
    best_profit: u64,
    best_cut: usize,
}

impl Frame {
    fn new(n: usize) -> Self {
        Self {
            n,
            next_cut: 1,
            best_profit: 0,
            best_cut: 0,
        }
    }
}

/// Per-call memo: one `(profit, first_cut)` slot per sub-length.
struct Memo<'a> {
    prices: &'a [u64],
    length: usize,
    entries: Vec<Option<(u64, usize)>>,
}

impl<'a> Memo<'a> {
    fn new(prices: &'a [u64], length: usize) -> Self {
        Self {
            prices,
            length,
            entries: vec![None; length + 1],
        }
    }

    #[inline]
    fn lookup(&self, n: usize) -> Option<(u64, usize)> {
        if n == 0 {
            Some((0, 0))
        } else {
            self.entries[n]
        }
    }

    /// Evaluates `best(target)`, memoizing every sub-problem it depends on.
    fn fill(&mut self, target: usize) -> Result<()> {
        if self.lookup(target).is_some() {
            return Ok(());
        }

        let mut pending = vec![Frame::new(target)];
        while let Some(frame) = pending.last_mut() {
            let n = frame.n;

            if frame.next_cut > n {
                let (profit, cut) = (frame.best_profit, frame.best_cut);
                trace!("[memoized] n={n} profit={profit} cut={cut}");
                self.entries[n] = Some((profit, cut));
                pending.pop();
                continue;
            }

            let c = frame.next_cut;
            match self.lookup(n - c) {
                Some((rest, _)) => {
                    let value = self.prices[c - 1]
                        .checked_add(rest)
                        .ok_or(Error::Overflow {
                            length: self.length,
                        })?;
                    if frame.best_cut == 0 || value > frame.best_profit {
                        frame.best_profit = value;
                        frame.best_cut = c;
                    }
                    frame.next_cut += 1;
                }
                // Suspend this scan until best(n - c) is known.
                None => pending.push(Frame::new(n - c)),
            }
        }

        Ok(())
    }

    fn into_table(self) -> CutTable {
        let mut table = CutTable::with_length(self.length);
        for (n, entry) in self.entries.into_iter().enumerate() {
            if let Some((profit, cut)) = entry {
                table.record(n, profit, cut);
            }
        }
        table
    }
}

impl MemoizedSolver {
    /// Creates a solver.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `best(length)` and returns the memo as a dense table.
    ///
    /// Every sub-length below `length` is reached from `best(length)`, so the
    /// returned table is complete.
    pub fn fill_table(&self, length: usize, prices: &PriceTable) -> Result<CutTable> {
        prices.ensure_covers(length)?;
        let mut memo = Memo::new(prices.as_slice(), length);
        memo.fill(length)?;
        Ok(memo.into_table())
    }
}

impl CutSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn solve(&self, length: usize, prices: &PriceTable) -> Result<CutSolution> {
        let solution = self.fill_table(length, prices)?.into_solution();
        debug!(
            "[memoized] length={length} profit={} pieces={}",
            solution.max_profit,
            solution.piece_count()
        );
        Ok(solution)
    }
}
