//! Priority-driven greedy batching.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by priority ascending (1 first); equal priorities
//!    keep their input order.
//! 2. Walk the sorted jobs, appending each to the open batch while the
//!    batch has fewer than `max_items` jobs and the volume stays within
//!    `max_volume`; otherwise close the batch and open a new one.
//! 3. A batch takes as long as its longest job.
//!
//! A job larger than `max_volume` is printed in a batch of its own.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for batching.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{PrintBatch, PrintJob, PrintPlan, PrinterConstraints};
use crate::validation::validate_batch_input;

/// Input container for batching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Jobs to print.
    pub jobs: Vec<PrintJob>,
    /// Printer limits.
    pub constraints: PrinterConstraints,
}

impl BatchRequest {
    /// Creates a new batch request.
    pub fn new(jobs: Vec<PrintJob>, constraints: PrinterConstraints) -> Self {
        Self { jobs, constraints }
    }
}

/// Greedy batch optimizer for a single printer.
///
/// # Example
///
/// ```
/// use u_rodcut::batching::BatchOptimizer;
/// use u_rodcut::models::{PrintJob, PrinterConstraints};
///
/// let jobs = vec![
///     PrintJob::new("M1").with_volume(100.0).with_priority(2).with_print_time(120),
///     PrintJob::new("M2").with_volume(150.0).with_priority(1).with_print_time(90),
///     PrintJob::new("M3").with_volume(120.0).with_priority(3).with_print_time(150),
/// ];
/// let optimizer = BatchOptimizer::new(PrinterConstraints::new(300.0, 2));
///
/// let plan = optimizer.optimize(&jobs).unwrap();
/// assert_eq!(plan.print_order, vec!["M2", "M1", "M3"]);
/// assert_eq!(plan.total_time, 270);
/// ```
#[derive(Debug, Clone)]
pub struct BatchOptimizer {
    constraints: PrinterConstraints,
}

impl BatchOptimizer {
    /// Creates an optimizer for a printer with the given limits.
    pub fn new(constraints: PrinterConstraints) -> Self {
        Self { constraints }
    }

    /// The printer limits in use.
    pub fn constraints(&self) -> &PrinterConstraints {
        &self.constraints
    }

    /// Groups jobs into batches and orders them for printing.
    ///
    /// # Errors
    /// [`Error::InvalidBatchInput`] with every validation issue found.
    pub fn optimize(&self, jobs: &[PrintJob]) -> Result<PrintPlan> {
        validate_batch_input(jobs, &self.constraints).map_err(Error::InvalidBatchInput)?;

        let mut plan = PrintPlan::new();
        let mut current = PrintBatch::default();

        for &idx in &self.sort_jobs(jobs) {
            let job = &jobs[idx];
            if !self
                .constraints
                .admits(current.len(), current.volume, job.volume)
            {
                self.close_batch(&mut plan, std::mem::take(&mut current));
            }
            current.job_ids.push(job.id.clone());
            current.volume += job.volume;
            current.time = current.time.max(job.print_time);
        }
        self.close_batch(&mut plan, current);

        debug!(
            "[batching] jobs={} batches={} total_time={}",
            jobs.len(),
            plan.batch_count(),
            plan.total_time
        );
        Ok(plan)
    }

    /// Optimizes from a request, using the request's constraints.
    pub fn optimize_request(request: &BatchRequest) -> Result<PrintPlan> {
        Self::new(request.constraints).optimize(&request.jobs)
    }

    fn close_batch(&self, plan: &mut PrintPlan, batch: PrintBatch) {
        if batch.is_empty() {
            return;
        }
        debug!(
            "[batching] batch #{} jobs={:?} volume={} time={}",
            plan.batch_count(),
            batch.job_ids,
            batch.volume,
            batch.time
        );
        plan.add_batch(batch);
    }

    /// Job indices in print order: priority ascending, stable.
    fn sort_jobs(&self, jobs: &[PrintJob]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by_key(|&i| jobs[i].priority);
        indices
    }
}

/// Batches jobs for a printer with the given limits.
pub fn optimize_batches(jobs: &[PrintJob], constraints: &PrinterConstraints) -> Result<PrintPlan> {
    BatchOptimizer::new(*constraints).optimize(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn job(id: &str, volume: f64, priority: u32, print_time: u32) -> PrintJob {
        PrintJob::new(id)
            .with_volume(volume)
            .with_priority(priority)
            .with_print_time(print_time)
    }

    fn printer() -> PrinterConstraints {
        PrinterConstraints::new(300.0, 2)
    }

    #[test]
    fn test_same_priority() {
        let jobs = vec![
            job("M1", 100.0, 1, 120),
            job("M2", 150.0, 1, 90),
            job("M3", 120.0, 1, 150),
        ];
        let plan = optimize_batches(&jobs, &printer()).unwrap();

        assert_eq!(plan.print_order, vec!["M1", "M2", "M3"]);
        // [M1, M2] hits max_items → max(120, 90) + 150
        assert_eq!(plan.total_time, 270);
        assert_eq!(plan.batch_count(), 2);
    }

    #[test]
    fn test_mixed_priorities() {
        let jobs = vec![
            job("M1", 100.0, 2, 120),
            job("M2", 150.0, 1, 90),
            job("M3", 120.0, 3, 150),
        ];
        let plan = optimize_batches(&jobs, &printer()).unwrap();

        assert_eq!(plan.print_order, vec!["M2", "M1", "M3"]);
        assert_eq!(plan.total_time, 270);
        assert_eq!(plan.batch_of("M1"), Some(0));
        assert_eq!(plan.batch_of("M3"), Some(1));
    }

    #[test]
    fn test_volume_limit() {
        let jobs = vec![
            job("M1", 250.0, 1, 180),
            job("M2", 200.0, 1, 150),
            job("M3", 180.0, 2, 120),
        ];
        let plan = optimize_batches(&jobs, &printer()).unwrap();

        assert_eq!(plan.print_order, vec!["M1", "M2", "M3"]);
        assert_eq!(plan.batch_count(), 3);
        assert_eq!(plan.total_time, 450);
    }

    #[test]
    fn test_volume_exactly_at_limit() {
        let jobs = vec![job("A", 100.0, 1, 10), job("B", 200.0, 1, 20)];
        let plan = optimize_batches(&jobs, &printer()).unwrap();
        assert_eq!(plan.batch_count(), 1);
        assert!((plan.batches[0].volume - 300.0).abs() < 1e-10);
        assert_eq!(plan.total_time, 20);
    }

    #[test]
    fn test_oversized_job_alone() {
        let jobs = vec![
            job("small", 50.0, 1, 30),
            job("huge", 400.0, 1, 200),
            job("tiny", 10.0, 1, 5),
        ];
        let plan = optimize_batches(&jobs, &PrinterConstraints::new(300.0, 5)).unwrap();

        assert_eq!(plan.batch_count(), 3);
        assert_eq!(plan.batches[1].job_ids, vec!["huge"]);
        assert_eq!(plan.total_time, 235);
    }

    #[test]
    fn test_stable_within_priority() {
        let jobs = vec![
            job("C", 1.0, 2, 1),
            job("A", 1.0, 1, 1),
            job("B", 1.0, 2, 1),
            job("D", 1.0, 1, 1),
        ];
        let plan = optimize_batches(&jobs, &PrinterConstraints::new(100.0, 10)).unwrap();
        assert_eq!(plan.print_order, vec!["A", "D", "C", "B"]);
    }

    #[test]
    fn test_empty_input() {
        let plan = optimize_batches(&[], &printer()).unwrap();
        assert!(plan.print_order.is_empty());
        assert_eq!(plan.total_time, 0);
        assert_eq!(plan.batch_count(), 0);
    }

    #[test]
    fn test_invalid_input() {
        let jobs = vec![job("M1", 10.0, 1, 1), job("M1", 20.0, 1, 1)];
        match optimize_batches(&jobs, &printer()) {
            Err(Error::InvalidBatchInput(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
            }
            other => panic!("expected InvalidBatchInput, got {other:?}"),
        }
    }

    #[test]
    fn test_optimize_request() {
        let request = BatchRequest::new(vec![job("M1", 10.0, 1, 45)], printer());
        let plan = BatchOptimizer::optimize_request(&request).unwrap();
        assert_eq!(plan.print_order, vec!["M1"]);
        assert_eq!(plan.total_time, 45);
    }
}
