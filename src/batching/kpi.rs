//! Batching quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Batch count | Number of printer runs |
//! | Total time | Sum of batch durations |
//! | Total volume | Sum of batch volumes |
//! | Avg fill rate | Mean of batch volume / max_volume |
//! | Avg items | Mean jobs per batch |
//! | Longest batch | Largest single batch duration |

use crate::models::{PrintPlan, PrinterConstraints};

/// Print plan performance indicators.
///
/// Times are in minutes.
#[derive(Debug, Clone)]
pub struct BatchKpi {
    /// Number of batches.
    pub batch_count: usize,
    /// Sum of batch durations (minutes).
    pub total_time: u64,
    /// Combined volume of all jobs.
    pub total_volume: f64,
    /// Mean volume utilization per batch. Above 1.0 when an oversized job is printed alone.
    pub avg_fill_rate: f64,
    /// Mean number of jobs per batch.
    pub avg_items_per_batch: f64,
    /// Longest single batch (minutes).
    pub longest_batch_time: u32,
}

impl BatchKpi {
    /// Computes KPIs from a plan and the printer limits it was built for.
    pub fn calculate(plan: &PrintPlan, constraints: &PrinterConstraints) -> Self {
        let batch_count = plan.batch_count();
        let total_volume: f64 = plan.batches.iter().map(|b| b.volume).sum();
        let total_items: usize = plan.batches.iter().map(|b| b.len()).sum();
        let longest_batch_time = plan.batches.iter().map(|b| b.time).max().unwrap_or(0);

        let avg_fill_rate = if batch_count == 0 || constraints.max_volume <= 0.0 {
            0.0
        } else {
            let sum: f64 = plan
                .batches
                .iter()
                .map(|b| b.volume / constraints.max_volume)
                .sum();
            sum / batch_count as f64
        };

        let avg_items_per_batch = if batch_count == 0 {
            0.0
        } else {
            total_items as f64 / batch_count as f64
        };

        Self {
            batch_count,
            total_time: plan.total_time,
            total_volume,
            avg_fill_rate,
            avg_items_per_batch,
            longest_batch_time,
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_total_time: u64, min_fill_rate: f64) -> bool {
        self.total_time <= max_total_time && self.avg_fill_rate >= min_fill_rate
    }
}
