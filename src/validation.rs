//! Input validation for print batching.
//!
//! Checks structural integrity of jobs and printer constraints before
//! batching. Detects:
//! - Duplicate job IDs
//! - Empty job IDs
//! - Negative or non-finite volumes
//! - Unusable printer constraints

use crate::models::{PrintJob, PrinterConstraints};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job has an empty ID.
    EmptyId,
    /// A job volume is negative, NaN or infinite.
    InvalidVolume,
    /// Printer constraints admit no job at all.
    InvalidConstraints,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a batching problem.
///
/// Checks:
/// 1. `max_items` is at least 1
/// 2. `max_volume` is finite and positive
/// 3. No job has an empty ID
/// 4. No duplicate job IDs
/// 5. Every job volume is finite and non-negative
///
/// A job larger than `max_volume` is not an error; it is printed alone.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch_input(
    jobs: &[PrintJob],
    constraints: &PrinterConstraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    if constraints.max_items == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            "max_items must be at least 1",
        ));
    }

    if !constraints.max_volume.is_finite() || constraints.max_volume <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            format!(
                "max_volume must be finite and positive, got {}",
                constraints.max_volume
            ),
        ));
    }

    let mut ids = HashSet::new();
    for job in jobs {
        if job.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Job with empty ID",
            ));
        } else if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if !job.volume.is_finite() || job.volume < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidVolume,
                format!("Job '{}' has invalid volume {}", job.id, job.volume),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints() -> PrinterConstraints {
        PrinterConstraints::new(300.0, 2)
    }

    fn job(id: &str, volume: f64) -> PrintJob {
        PrintJob::new(id).with_volume(volume).with_print_time(60)
    }

    #[test]
    fn test_valid_input() {
        let jobs = vec![job("M1", 100.0), job("M2", 150.0)];
        assert!(validate_batch_input(&jobs, &constraints()).is_ok());
    }

    #[test]
    fn test_oversized_job_is_valid() {
        let jobs = vec![job("big", 500.0)];
        assert!(validate_batch_input(&jobs, &constraints()).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![job("M1", 100.0), job("M1", 50.0)];
        let errors = validate_batch_input(&jobs, &constraints()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("M1")));
    }

    #[test]
    fn test_empty_id() {
        let jobs = vec![job("", 100.0)];
        let errors = validate_batch_input(&jobs, &constraints()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
    }

    #[test]
    fn test_invalid_volume() {
        let jobs = vec![job("neg", -1.0), job("nan", f64::NAN)];
        let errors = validate_batch_input(&jobs, &constraints()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidVolume)
                .count(),
            2
        );
    }

    #[test]
    fn test_invalid_constraints() {
        let errors =
            validate_batch_input(&[], &PrinterConstraints::new(f64::INFINITY, 0)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidConstraints));
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![job("M1", -5.0), job("M1", 10.0)];
        let errors =
            validate_batch_input(&jobs, &PrinterConstraints::new(0.0, 1)).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
