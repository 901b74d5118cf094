//! Raw rod-cutting request.
//!
//! Mirrors the loosely-typed input a caller may deserialize from JSON:
//! a signed length and signed prices. [`CutRequest::validate`] turns it
//! into the typed inputs the solvers accept.

use serde::{Deserialize, Serialize};

use super::PriceTable;
use crate::error::{Error, Result};

/// Unvalidated rod-cutting input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutRequest {
    /// Rod length.
    pub length: i64,
    /// `prices[i]` is the price of a piece of length `i + 1`.
    pub prices: Vec<i64>,
}

impl CutRequest {
    /// Creates a request.
    pub fn new(length: i64, prices: Vec<i64>) -> Self {
        Self { length, prices }
    }

    /// Validates the request.
    ///
    /// Checks, in order: the length is non-negative, every price is
    /// non-negative, and the table covers the length.
    pub fn validate(&self) -> Result<(usize, PriceTable)> {
        let length =
            usize::try_from(self.length).map_err(|_| Error::NegativeLength(self.length))?;

        let prices = self
            .prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                u64::try_from(p).map_err(|_| Error::NegativePrice {
                    piece_length: i + 1,
                    price: p,
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        let table = PriceTable::new(prices);
        table.ensure_covers(length)?;
        Ok((length, table))
    }
}
