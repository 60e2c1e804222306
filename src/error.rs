//! Error types for scheduling runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by a scheduling run.
///
/// A run either completes fully or is rejected here before any job is
/// dispatched. EDF deadline misses are not errors; rejected jobs are simply
/// absent from the resulting [`Schedule`](crate::models::Schedule).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid configuration: {}", join_messages(.0))]
    InvalidConfiguration(Vec<ValidationError>),
}

impl ScheduleError {
    /// The validation errors behind this failure.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidConfiguration(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidConfiguration(errors)
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(error: ValidationError) -> Self {
        ScheduleError::InvalidConfiguration(vec![error])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_joins_messages() {
        let err = ScheduleError::from(vec![
            ValidationError::new(
                ValidationErrorKind::InvalidUnitCount,
                "Unit count must be positive, got 0",
            ),
            ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                "Job 3 has negative duration -5",
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Unit count must be positive, got 0; Job 3 has negative duration -5"
        );
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_from_single_error() {
        let err = ScheduleError::from(ValidationError::new(
            ValidationErrorKind::UnknownAlgorithm,
            "Unknown scheduling algorithm 'RR'",
        ));
        assert_eq!(err.errors()[0].kind, ValidationErrorKind::UnknownAlgorithm);
    }
}
