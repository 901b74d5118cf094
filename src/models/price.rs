//! Price table model.
//!
//! Prices are stored 0-based but addressed by piece length, so
//! `price(1)` is the revenue of a piece of length 1.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Revenue per piece length.
///
/// Immutable input to a solve call. Prices are unsigned so negative
/// prices cannot be represented; use [`CutRequest`](super::CutRequest)
/// to validate raw signed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: Vec<u64>,
}

impl PriceTable {
    /// Creates a price table where `prices[i]` is the price of a piece of length `i + 1`.
    pub fn new(prices: Vec<u64>) -> Self {
        Self { prices }
    }

    /// Number of piece lengths priced.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether no piece length is priced.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price of a piece of the given length. `None` for length 0 or beyond the table.
    #[inline]
    pub fn price(&self, piece_length: usize) -> Option<u64> {
        piece_length
            .checked_sub(1)
            .and_then(|i| self.prices.get(i))
            .copied()
    }

    /// Raw prices, 0-based.
    pub fn as_slice(&self) -> &[u64] {
        &self.prices
    }

    /// Checks that every piece length up to `length` has a price.
    pub fn ensure_covers(&self, length: usize) -> Result<()> {
        if self.prices.len() < length {
            return Err(Error::MissingPrice {
                length,
                available: self.prices.len(),
            });
        }
        Ok(())
    }

    /// Total revenue of selling the given pieces.
    ///
    /// `None` if a piece is unpriced (including length 0) or the sum overflows.
    pub fn revenue(&self, pieces: &[usize]) -> Option<u64> {
        pieces
            .iter()
            .try_fold(0u64, |acc, &p| acc.checked_add(self.price(p)?))
    }
}

impl From<Vec<u64>> for PriceTable {
    fn from(prices: Vec<u64>) -> Self {
        Self::new(prices)
    }
}

impl From<&[u64]> for PriceTable {
    fn from(prices: &[u64]) -> Self {
        Self::new(prices.to_vec())
    }
}
