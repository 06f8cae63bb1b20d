//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulator and the input generator.
///
/// The simulation itself is total over valid input; the only failure is
/// rejected parameters, reported before any state is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// One or more parameters failed validation.
    #[error("invalid parameter: {}", join_messages(.0))]
    InvalidParameter(Vec<ValidationError>),
}

impl SimulationError {
    /// The validation errors behind this failure.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidParameter(errors) => errors,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_joins_messages() {
        let err = SimulationError::InvalidParameter(vec![
            ValidationError::new(ValidationErrorKind::InvalidQuantum, "Quantum must be >= 1, got 0"),
            ValidationError::new(ValidationErrorKind::InvalidHorizon, "Max time must be >= 1, got 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid parameter: Quantum must be >= 1, got 0; Max time must be >= 1, got 0"
        );
        assert_eq!(err.errors().len(), 2);
    }
}
