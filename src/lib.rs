//! Rod-cutting optimization for the U-Engine ecosystem.
//!
//! Solves the classic rod-cutting problem with two interchangeable dynamic
//! programming strategies and reconstructs an optimal cut sequence. Also
//! ships a greedy batcher for 3D-print job queues.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `PriceTable`, `CutRequest`, `CutSolution`,
//!   `PrintJob`, `PrinterConstraints`, `PrintPlan`
//! - **`rodcut`**: Memoized and tabulated solvers, `CutTable` reconstruction,
//!   `RodCutter` strategy selection, random instance generation
//! - **`verify`**: Solution invariant checks, brute-force reference,
//!   cross-strategy comparison
//! - **`batching`**: Priority-driven greedy print batching and KPIs
//! - **`validation`**: Batch input integrity checks
//!
//! # Example
//!
//! ```
//! use u_rodcut::models::PriceTable;
//! use u_rodcut::rodcut::solve_table;
//!
//! let solution = solve_table(4, &PriceTable::new(vec![3, 5, 6, 7])).unwrap();
//! assert_eq!(solution.max_profit, 12);
//! assert_eq!(solution.cuts, vec![1, 1, 1, 1]);
//! assert_eq!(solution.number_of_cuts, 3);
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod batching;
mod error;
pub mod models;
pub mod rodcut;
pub mod validation;
pub mod verify;

pub use error::{Error, Result};
