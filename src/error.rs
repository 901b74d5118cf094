//! Crate error type.
//!
//! Solver errors are fail-fast: the first problem found is returned and no
//! partial result is produced. Batch input validation collects every issue
//! (see [`crate::validation`]) and surfaces them together.

use thiserror::Error;

use crate::validation::ValidationError;

/// Canonical result for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("rod length must be non-negative, got {0}")]
    NegativeLength(i64),

    #[error("price table has {available} entries but a rod of length {length} needs {length}")]
    MissingPrice { length: usize, available: usize },

    #[error("price for a piece of length {piece_length} is negative ({price})")]
    NegativePrice { piece_length: usize, price: i64 },

    #[error("rod length {length} exceeds the configured limit of {limit}")]
    LengthLimitExceeded { length: usize, limit: usize },

    #[error("profit overflowed u64 while solving for length {length}")]
    Overflow { length: usize },

    #[error("invalid batch input: {} issue(s)", .0.len())]
    InvalidBatchInput(Vec<ValidationError>),
}
