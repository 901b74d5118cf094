//! Domain models.
//!
//! Input and solution types for both problems this crate solves:
//!
//! | Problem | Input | Solution |
//! |---------|-------|----------|
//! | Rod cutting | `PriceTable` (or raw `CutRequest`) | `CutSolution` |
//! | Print batching | `PrintJob`, `PrinterConstraints` | `PrintPlan`, `PrintBatch` |

mod job;
mod plan;
mod price;
mod request;
mod solution;

pub use job::{PrintJob, PrinterConstraints};
pub use plan::{PrintBatch, PrintPlan};
pub use price::PriceTable;
pub use request::CutRequest;
pub use solution::CutSolution;
