//! Input validation for scheduling runs.
//!
//! Checks the job set and run configuration before any dispatch step.
//! Detects:
//! - Zero or negative unit counts
//! - Negative job durations
//! - Total duration beyond the simulated time range
//! - Duplicate job IDs
//! - Unknown algorithm and user level names
//!
//! All problems are collected so a caller sees every issue at once.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::JobDescriptor;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Unit count is zero or negative.
    InvalidUnitCount,
    /// A job has a negative duration.
    NegativeDuration,
    /// The summed job durations do not fit in simulated time.
    DurationOverflow,
    /// A capacity entry is negative.
    NegativeCapacity,
    /// Two jobs share the same ID.
    DuplicateId,
    /// An algorithm name does not match any known policy.
    UnknownAlgorithm,
    /// A user level name does not match any known level.
    UnknownUser,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a unit count coming from configuration.
///
/// Signed so that negative values read from a config file are reported
/// rather than wrapped.
pub fn validate_units(units: i64) -> Result<usize, ValidationError> {
    if units <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidUnitCount,
            format!("Unit count must be positive, got {units}"),
        ));
    }
    usize::try_from(units).map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidUnitCount,
            format!("Unit count {units} exceeds platform limits"),
        )
    })
}

/// Validates the job set and unit count for a scheduling run.
///
/// Checks:
/// 1. Unit count is positive
/// 2. No job has a negative duration
/// 3. The total duration fits in `i64`, which bounds every finish time,
///    clock value and dispatch end of the run
/// 4. No duplicate job IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_run(jobs: &[Arc<JobDescriptor>], units: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if units == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidUnitCount,
            "Unit count must be positive, got 0",
        ));
    }

    let mut ids = HashSet::new();
    let mut total: Option<i64> = Some(0);
    for job in jobs {
        if job.duration() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!(
                    "Job {} ('{}') has negative duration {}",
                    job.id(),
                    job.name(),
                    job.duration()
                ),
            ));
        } else {
            total = total.and_then(|t| t.checked_add(job.duration()));
        }
        if !ids.insert(job.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id()),
            ));
        }
    }

    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationOverflow,
            format!("Total duration of {} jobs exceeds {}", jobs.len(), i64::MAX),
        ));
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
    use crate::models::{IdAllocator, JobId, User};

    fn job(ids: &IdAllocator, name: &str, duration: i64) -> Arc<JobDescriptor> {
        Arc::new(ids.job(name, duration))
    }

    #[test]
    fn test_valid_run() {
        let ids = IdAllocator::new();
        let jobs = vec![job(&ids, "J1", 10), job(&ids, "J2", 0)];
        assert!(validate_run(&jobs, 2).is_ok());
    }

    #[test]
    fn test_zero_units() {
        let errors = validate_run(&[], 0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidUnitCount);
    }

    #[test]
    fn test_negative_duration() {
        let ids = IdAllocator::new();
        let jobs = vec![job(&ids, "ok", 5), job(&ids, "bad", -1)];
        let errors = validate_run(&jobs, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration && e.message.contains("bad")));
    }

    #[test]
    fn test_duplicate_id() {
        let a = Arc::new(JobDescriptor::new(JobId::new(7), "A", 1));
        let b = Arc::new(JobDescriptor::new(JobId::new(7), "B", 1).with_user(User::Admin));
        let errors = validate_run(&[a, b], 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_multiple_errors() {
        let ids = IdAllocator::new();
        let jobs = vec![job(&ids, "bad", -3)];
        let errors = validate_run(&jobs, 0).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_total_duration_overflow() {
        let ids = IdAllocator::new();
        let half = i64::MAX / 2 + 1;
        let jobs = vec![job(&ids, "a", half), job(&ids, "b", half)];
        let errors = validate_run(&jobs, 1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DurationOverflow);

        // Exactly i64::MAX in total still fits.
        let jobs = vec![job(&ids, "c", i64::MAX - 1), job(&ids, "d", 1)];
        assert!(validate_run(&jobs, 1).is_ok());
    }

    #[test]
    fn test_validate_units() {
        assert_eq!(validate_units(3), Ok(3));
        assert_eq!(
            validate_units(0).unwrap_err().kind,
            ValidationErrorKind::InvalidUnitCount
        );
        assert!(validate_units(-2).unwrap_err().message.contains("-2"));
    }
}
