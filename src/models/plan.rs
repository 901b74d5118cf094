//! Print plan (batching solution) model.

use serde::{Deserialize, Serialize};

/// Jobs printed together in one printer run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintBatch {
    /// Job IDs in print order.
    pub job_ids: Vec<String>,
    /// Combined volume of the batch.
    pub volume: f64,
    /// Batch duration: the longest print time in the batch (minutes).
    pub time: u32,
}

impl PrintBatch {
    /// Number of jobs in the batch.
    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the batch holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

/// A complete batching plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintPlan {
    /// All job IDs in the order they are printed.
    pub print_order: Vec<String>,
    /// Sum of batch durations (minutes).
    pub total_time: u64,
    /// The batches, in print order.
    pub batches: Vec<PrintBatch>,
}

impl PrintPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch, extending the print order and total time.
    pub fn add_batch(&mut self, batch: PrintBatch) {
        self.print_order.extend(batch.job_ids.iter().cloned());
        self.total_time += u64::from(batch.time);
        self.batches.push(batch);
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Index of the batch containing the given job.
    pub fn batch_of(&self, job_id: &str) -> Option<usize> {
        self.batches
            .iter()
            .position(|b| b.job_ids.iter().any(|id| id == job_id))
    }
}
