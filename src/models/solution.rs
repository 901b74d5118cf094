//! Cut solution model.

use serde::{Deserialize, Serialize};

/// An optimal way to cut a rod.
///
/// `cuts` lists piece lengths in the order they were chosen, starting
/// from the full rod. `number_of_cuts` counts pieces minus one, so a rod
/// sold whole reports zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutSolution {
    /// Maximum achievable revenue.
    pub max_profit: u64,
    /// Piece lengths, summing to the rod length.
    pub cuts: Vec<usize>,
    /// Pieces minus one (0 when there are no pieces).
    pub number_of_cuts: usize,
}

impl CutSolution {
    /// The solution for a rod of length 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a solution from its pieces, deriving `number_of_cuts`.
    pub fn from_cuts(max_profit: u64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Number of pieces the rod is cut into.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.cuts.len()
    }

    /// Sum of all piece lengths.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// Whether the rod is sold as a single uncut piece.
    pub fn is_whole_rod(&self) -> bool {
        self.cuts.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cuts_counts_pieces_minus_one() {
        let s = CutSolution::from_cuts(12, vec![1, 2, 2]);
        assert_eq!(s.number_of_cuts, 2);
        assert_eq!(s.piece_count(), 3);
        assert_eq!(s.total_length(), 5);
        assert!(!s.is_whole_rod());
    }

    #[test]
    fn test_whole_rod() {
        let s = CutSolution::from_cuts(8, vec![3]);
        assert_eq!(s.number_of_cuts, 0);
        assert!(s.is_whole_rod());
    }

    #[test]
    fn test_empty() {
        let s = CutSolution::empty();
        assert_eq!(s.max_profit, 0);
        assert!(s.cuts.is_empty());
        assert_eq!(s.number_of_cuts, 0);
        assert_eq!(s, CutSolution::from_cuts(0, vec![]));
    }
}
