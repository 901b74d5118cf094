//! 3D-print job batching.
//!
//! Groups print jobs into printer runs under volume and item-count
//! limits, most urgent jobs first, and evaluates the resulting plan.
//! Independent of the rod-cutting solver.
//!
//! # Algorithm
//!
//! `BatchOptimizer` is a greedy, priority-ordered, next-fit heuristic.
//! It is not optimal, but it is fast and keeps urgent jobs at the front.
//!
//! # KPI
//!
//! `BatchKpi` computes batch count, total time, fill rate and batch size.

mod greedy;
mod kpi;

pub use greedy::{optimize_batches, BatchOptimizer, BatchRequest};
pub use kpi::BatchKpi;
