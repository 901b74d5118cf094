//! Print job model.
//!
//! A print job is a single 3D model waiting to be printed. Jobs are
//! grouped into batches that share one printer run.

use serde::{Deserialize, Serialize};

/// A 3D-print job.
///
/// # Priority
/// Lower values are more urgent: 1 is the highest priority
/// (e.g. thesis work), 3 the lowest (e.g. personal projects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    /// Unique job identifier.
    pub id: String,
    /// Model volume (printer volume units, e.g. cm³).
    pub volume: f64,
    /// Priority class (lower = printed earlier).
    pub priority: u32,
    /// Print duration (minutes).
    pub print_time: u32,
}

impl PrintJob {
    /// Creates a job with zero volume, priority 1 and zero print time.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            volume: 0.0,
            priority: 1,
            print_time: 0,
        }
    }

    /// Sets the model volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the priority class.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the print duration in minutes.
    pub fn with_print_time(mut self, minutes: u32) -> Self {
        self.print_time = minutes;
        self
    }
}

/// Physical limits of a printer for a single batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrinterConstraints {
    /// Maximum combined volume of one batch.
    pub max_volume: f64,
    /// Maximum number of jobs in one batch.
    pub max_items: usize,
}

impl PrinterConstraints {
    /// Creates printer constraints.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Whether a batch holding `items` jobs of `volume` total can take one more job.
    #[inline]
    pub fn admits(&self, items: usize, volume: f64, extra_volume: f64) -> bool {
        items < self.max_items && volume + extra_volume <= self.max_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = PrintJob::new("M1")
            .with_volume(120.0)
            .with_priority(2)
            .with_print_time(90);

        assert_eq!(job.id, "M1");
        assert!((job.volume - 120.0).abs() < 1e-10);
        assert_eq!(job.priority, 2);
        assert_eq!(job.print_time, 90);
    }

    #[test]
    fn test_constraints_admit() {
        let c = PrinterConstraints::new(300.0, 2);
        assert!(c.admits(0, 0.0, 300.0));
        assert!(c.admits(1, 100.0, 150.0));
        assert!(!c.admits(1, 250.0, 100.0));
        assert!(!c.admits(2, 100.0, 10.0));
    }
}
