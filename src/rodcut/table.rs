//! Profit and cut-choice tables shared by both strategies.

use crate::models::CutSolution;

/// Dense DP tables over sub-lengths `0..=length`.
///
/// `profit[n]` is the best revenue for a rod of length `n`;
/// `first_cut[n]` is the piece length that achieved it. Index 0 holds
/// `(0, 0)`. Both tables are owned by a single solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutTable {
    profit: Vec<u64>,
    first_cut: Vec<usize>,
}

impl CutTable {
    /// Zeroed tables for sub-lengths `0..=length`.
    pub(crate) fn with_length(length: usize) -> Self {
        Self {
            profit: vec![0; length + 1],
            first_cut: vec![0; length + 1],
        }
    }

    /// Records the best profit and first cut for sub-length `n`.
    #[inline]
    pub(crate) fn record(&mut self, n: usize, profit: u64, cut: usize) {
        self.profit[n] = profit;
        self.first_cut[n] = cut;
    }

    /// Profit of the sub-problem at `n`, as already filled.
    #[inline]
    pub(crate) fn profit_at(&self, n: usize) -> u64 {
        self.profit[n]
    }

    /// Rod length the table was built for.
    pub fn length(&self) -> usize {
        self.profit.len() - 1
    }

    /// Best profit for sub-length `n`.
    pub fn profit(&self, n: usize) -> Option<u64> {
        self.profit.get(n).copied()
    }

    /// First cut chosen for sub-length `n` (0 for `n == 0`).
    pub fn first_cut(&self, n: usize) -> Option<usize> {
        self.first_cut.get(n).copied()
    }

    /// Best profit for every sub-length, indexed by length.
    pub fn profits(&self) -> &[u64] {
        &self.profit
    }

    /// Traces the cut sequence for the full length.
    pub fn reconstruct(&self) -> Vec<usize> {
        self.reconstruct_from(self.length())
    }

    /// Traces the cut sequence for sub-length `n`.
    ///
    /// Starts at `n` and repeatedly takes the recorded first cut of the
    /// remaining length, so the piece chosen for the whole rod comes first.
    /// Lengths beyond the table yield an empty sequence.
    ///
    /// # Panics
    ///
    /// If a sub-length was never filled. Tables built by the solvers are
    /// complete up to their length.
    pub fn reconstruct_from(&self, n: usize) -> Vec<usize> {
        if n > self.length() {
            return Vec::new();
        }

        let mut cuts = Vec::new();
        let mut remaining = n;
        while remaining > 0 {
            let cut = self.first_cut[remaining];
            assert!(
                (1..=remaining).contains(&cut),
                "no valid cut recorded for length {remaining}"
            );
            cuts.push(cut);
            remaining -= cut;
        }
        cuts
    }

    /// Extracts the solution for the full length, consuming the tables.
    pub fn into_solution(self) -> CutSolution {
        let cuts = self.reconstruct();
        CutSolution::from_cuts(self.profit[self.length()], cuts)
    }
}
