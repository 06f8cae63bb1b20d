//! Random process generation.
//!
//! Produces uniformly random workloads for exercising the simulator. The
//! caller supplies the RNG, so a seeded generator reproduces the same set.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::ProcessDescriptor;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Shape of a random workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of processes (ids `1..=count`).
    pub count: u32,
    /// Arrival times are drawn from `[0, max_arrival]`.
    pub max_arrival: i64,
    /// Lower bound of burst times (inclusive).
    pub min_burst: i64,
    /// Upper bound of burst times (inclusive).
    pub max_burst: i64,
}

impl GeneratorConfig {
    /// Creates a generator config.
    pub fn new(count: u32, max_arrival: i64, min_burst: i64, max_burst: i64) -> Self {
        Self {
            count,
            max_arrival,
            min_burst,
            max_burst,
        }
    }

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.max_arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!("Max arrival must be >= 0, got {}", self.max_arrival),
            ));
        }
        if self.min_burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Min burst must be >= 1, got {}", self.min_burst),
            ));
        }
        if self.max_burst < self.min_burst {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Max burst {} is below min burst {}",
                    self.max_burst, self.min_burst
                ),
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(5, 10, 1, 10)
    }
}

/// Generates `config.count` random process descriptors.
///
/// # Errors
/// `SimulationError::InvalidParameter` if the arrival or burst ranges are empty
/// or would produce invalid descriptors.
pub fn generate_processes<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<ProcessDescriptor>, SimulationError> {
    config.validate().map_err(SimulationError::InvalidParameter)?;

    Ok((1..=config.count)
        .map(|id| {
            let arrival = rng.random_range(0..=config.max_arrival);
            let burst = rng.random_range(config.min_burst..=config.max_burst);
            ProcessDescriptor::new(id, arrival, burst)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{RoundRobinScheduler, SimulationConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::new(50, 10, 2, 6);
        let processes = generate_processes(&config, &mut rng).unwrap();

        assert_eq!(processes.len(), 50);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((0..=10).contains(&p.arrival_time));
            assert!((2..=6).contains(&p.burst_time));
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let config = GeneratorConfig::default();
        let a = generate_processes(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_processes(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let processes = generate_processes(&GeneratorConfig::new(3, 0, 4, 4), &mut rng).unwrap();
        assert!(processes
            .iter()
            .all(|p| p.arrival_time == 0 && p.burst_time == 4));
        assert!(generate_processes(&GeneratorConfig::new(0, 5, 1, 2), &mut rng)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_processes(&GeneratorConfig::new(3, -1, 0, 5), &mut rng).unwrap_err();
        assert_eq!(err.errors().len(), 2);

        let err = generate_processes(&GeneratorConfig::new(3, 5, 4, 2), &mut rng).unwrap_err();
        assert_eq!(err.errors()[0].kind, ValidationErrorKind::InvalidBurstTime);
    }

    #[test]
    fn test_generated_workload_simulates() {
        let mut rng = StdRng::seed_from_u64(2024);
        let processes = generate_processes(&GeneratorConfig::new(8, 10, 1, 10), &mut rng).unwrap();
        let scheduler = RoundRobinScheduler::new(SimulationConfig::new(3, 200));
        let result = scheduler.simulate(&processes).unwrap();
        // 8 bursts of at most 10 after arrivals of at most 10 fit in 200 units
        assert!(result.all_completed());
    }
}
