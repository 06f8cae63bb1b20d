//! Input validation for round-robin simulations.
//!
//! Checks parameters and process descriptors before simulating. Detects:
//! - Non-positive time quantum
//! - Non-positive or oversized horizon
//! - Non-positive burst times
//! - Negative arrival times
//! - Zero or duplicate process IDs
//!
//! All problems are collected; a rejected input produces no partial state.

use std::collections::HashSet;

use crate::models::ProcessDescriptor;
use crate::scheduler::SimulationConfig;

/// Largest accepted horizon, in time units.
///
/// The timeline holds one slot per unit of the horizon, so this bounds the
/// allocation made by a single simulation.
pub const MAX_HORIZON: i64 = 1 << 24;

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
    /// Quantum is less than 1.
    InvalidQuantum,
    /// Horizon (max time) is less than 1 or above [`MAX_HORIZON`].
    InvalidHorizon,
    /// A burst time is less than 1.
    InvalidBurstTime,
    /// An arrival time is negative.
    InvalidArrivalTime,
    /// A process ID is zero.
    InvalidId,
    /// Two processes share the same ID.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a simulation.
///
/// Checks:
/// 1. `quantum >= 1`
/// 2. `1 <= max_time <= MAX_HORIZON`, and `max_time` fits in `usize`
/// 3. Every `burst_time >= 1`
/// 4. Every `arrival_time >= 0`
/// 5. Every `id >= 1`, no duplicates
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessDescriptor], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.quantum < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be >= 1, got {}", config.quantum),
        ));
    }

    if config.max_time < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHorizon,
            format!("Max time must be >= 1, got {}", config.max_time),
        ));
    } else if config.max_time > MAX_HORIZON || usize::try_from(config.max_time).is_err() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHorizon,
            format!(
                "Max time must be <= {MAX_HORIZON}, got {}",
                config.max_time
            ),
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be >= 1, got 0",
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Process {} has burst time {}, must be >= 1", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Process {} has arrival time {}, must be >= 0",
                    p.id, p.arrival_time
                ),
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

    fn sample_processes() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new(1, 0, 5),
            ProcessDescriptor::new(2, 3, 2),
            ProcessDescriptor::new(3, 3, 7),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), &SimulationConfig::new(3, 20)).is_ok());
    }

    #[test]
    fn test_empty_process_list_is_valid() {
        assert!(validate_input(&[], &SimulationConfig::new(1, 1)).is_ok());
    }

    #[test]
    fn test_invalid_quantum() {
        let errors = validate_input(&sample_processes(), &SimulationConfig::new(0, 20)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_invalid_horizon() {
        let errors = validate_input(&[], &SimulationConfig::new(2, -4)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidHorizon && e.message.contains("-4")));
    }

    #[test]
    fn test_oversized_horizon() {
        for max_time in [MAX_HORIZON + 1, i64::MAX] {
            let errors = validate_input(&[], &SimulationConfig::new(1, max_time)).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidHorizon);
        }
        assert!(validate_input(&[], &SimulationConfig::new(1, MAX_HORIZON)).is_ok());
    }

    #[test]
    fn test_zero_id() {
        let processes = vec![ProcessDescriptor::new(0, 0, 3), ProcessDescriptor::new(1, 0, 3)];
        let errors = validate_input(&processes, &SimulationConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidId);
    }

    #[test]
    fn test_invalid_burst_time() {
        let processes = vec![ProcessDescriptor::new(1, 0, 0)];
        let errors = validate_input(&processes, &SimulationConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
    }

    #[test]
    fn test_invalid_arrival_time() {
        let processes = vec![ProcessDescriptor::new(1, -1, 3)];
        let errors = validate_input(&processes, &SimulationConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidArrivalTime));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![ProcessDescriptor::new(1, 0, 3), ProcessDescriptor::new(1, 2, 3)];
        let errors = validate_input(&processes, &SimulationConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('1')));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![ProcessDescriptor::new(0, -2, 0)];
        let errors = validate_input(&processes, &SimulationConfig::new(0, 0)).unwrap_err();
        assert_eq!(errors.len(), 5);
    }
}
