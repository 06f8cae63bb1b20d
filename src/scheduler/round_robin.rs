//! Round-robin scheduling simulator.
//!
//! # Algorithm
//!
//! One iteration per time unit `t` in `0..max_time`, stopping early once
//! every process has completed:
//!
//! 1. Admit every not-yet-admitted process with `arrival_time <= t` to the
//!    tail of the ready queue (ascending arrival, ties in input order).
//! 2. If the CPU is free, dispatch the head of the ready queue. The first
//!    dispatch of a process fixes its `start_time`.
//! 3. Record the CPU occupant (or idle) in the timeline at `t`.
//! 4. Run the occupant for one unit. Completion wins over quantum expiry;
//!    otherwise an exhausted quantum re-queues the process at the tail.
//!
//! Arrivals at `t` are admitted before a process preempted at `t` is
//! re-queued, so newcomers run ahead of the preempted process.
//!
//! # Complexity
//! O(max_time + n log n) where n = number of processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, ProcessRuntimeState, SimulationResult, Timeline};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum contiguous units a process may hold the CPU.
    pub quantum: i64,
    /// Horizon: number of time units simulated at most.
    pub max_time: i64,
}

impl SimulationConfig {
    /// Creates a config with the given quantum and horizon.
    pub fn new(quantum: i64, max_time: i64) -> Self {
        Self { quantum, max_time }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the horizon.
    pub fn with_max_time(mut self, max_time: i64) -> Self {
        self.max_time = max_time;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: 3,
            max_time: 50,
        }
    }
}

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<ProcessDescriptor>,
    /// Quantum and horizon.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request with the default config.
    pub fn new(processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            processes,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the config.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Round-robin CPU scheduling simulator.
///
/// Stateless between runs: every call builds its own runtime records and
/// ready queue, so one scheduler can be shared across threads.
///
/// # Example
///
/// ```
/// use rr_schedule::models::ProcessDescriptor;
/// use rr_schedule::scheduler::{RoundRobinScheduler, SimulationConfig};
///
/// let scheduler = RoundRobinScheduler::new(SimulationConfig::new(2, 8));
/// let result = scheduler
///     .simulate(&[ProcessDescriptor::new(1, 0, 4), ProcessDescriptor::new(2, 0, 4)])
///     .unwrap();
///
/// let slots: Vec<Option<u32>> = result.timeline.slots().to_vec();
/// assert_eq!(slots, [1u32, 1, 2, 2, 1, 1, 2, 2].map(Some));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    config: SimulationConfig,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given config.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active config.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates the input and runs the simulation.
    ///
    /// # Errors
    /// `SimulationError::InvalidParameter` if the quantum, horizon, or any
    /// descriptor is rejected by [`validate_input`].
    pub fn simulate(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<SimulationResult, SimulationError> {
        if let Err(errors) = validate_input(processes, &self.config) {
            warn!("rejected simulation input: {} problem(s)", errors.len());
            return Err(SimulationError::InvalidParameter(errors));
        }
        self.run(processes)
    }

    /// Runs a self-contained request, using its config instead of this one.
    pub fn simulate_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        Self::new(request.config).simulate(&request.processes)
    }

    /// The discrete event loop. Input must already be validated.
    fn run(&self, processes: &[ProcessDescriptor]) -> Result<SimulationResult, SimulationError> {
        let SimulationConfig { quantum, max_time } = self.config;
        debug!(
            "simulating {} process(es), quantum={quantum}, max_time={max_time}",
            processes.len()
        );

        let mut states: Vec<ProcessRuntimeState> =
            processes.iter().map(ProcessRuntimeState::from).collect();
        // Stable: equal arrivals keep input order.
        states.sort_by_key(|p| p.arrival_time);

        let horizon = usize::try_from(max_time).map_err(|_| horizon_error(max_time))?;
        let mut timeline = Timeline::try_idle(horizon).map_err(|_| horizon_error(max_time))?;
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(states.len());
        let mut next_arrival = 0;
        let mut current: Option<usize> = None;
        let mut quantum_used = 0;
        let mut completed = 0;
        let mut time: i64 = 0;

        while time < max_time && completed < states.len() {
            // Sorted by arrival, so the admitted set is always a prefix.
            while next_arrival < states.len() && states[next_arrival].arrival_time <= time {
                ready.push_back(next_arrival);
                next_arrival += 1;
            }

            if current.is_none() {
                if let Some(idx) = ready.pop_front() {
                    states[idx].dispatch(time);
                    trace!("t={time}: dispatch process {}", states[idx].id);
                    current = Some(idx);
                    quantum_used = 0;
                }
            }

            timeline.record(time as usize, current.map(|idx| states[idx].id));

            if let Some(idx) = current {
                quantum_used += 1;
                if states[idx].execute(time) {
                    trace!("t={time}: process {} completed", states[idx].id);
                    completed += 1;
                    current = None;
                    quantum_used = 0;
                } else if quantum_used == quantum {
                    trace!("t={time}: process {} preempted", states[idx].id);
                    ready.push_back(idx);
                    current = None;
                    quantum_used = 0;
                }
            }

            time += 1;
        }

        let (avg_waiting_time, avg_turnaround_time) = averages(&states);
        debug!(
            "simulation finished at t={time}: {completed}/{} completed",
            states.len()
        );

        Ok(SimulationResult {
            timeline,
            processes: states,
            avg_waiting_time,
            avg_turnaround_time,
            total_time: time,
        })
    }
}

fn horizon_error(max_time: i64) -> SimulationError {
    SimulationError::InvalidParameter(vec![ValidationError::new(
        ValidationErrorKind::InvalidHorizon,
        format!("Cannot allocate a timeline of {max_time} units"),
    )])
}

/// Mean (waiting, turnaround) over completed processes; zero if none.
fn averages(states: &[ProcessRuntimeState]) -> (f64, f64) {
    let mut total_waiting: i64 = 0;
    let mut total_turnaround: i64 = 0;
    let mut count: usize = 0;

    for state in states {
        if let (Some(turnaround), Some(waiting)) = (state.turnaround_time(), state.waiting_time()) {
            total_turnaround += turnaround;
            total_waiting += waiting;
            count += 1;
        }
    }

    if count == 0 {
        (0.0, 0.0)
    } else {
        (
            total_waiting as f64 / count as f64,
            total_turnaround as f64 / count as f64,
        )
    }
}

/// Runs a round-robin simulation.
///
/// Equivalent to `RoundRobinScheduler::new(SimulationConfig::new(quantum, max_time)).simulate(processes)`.
pub fn simulate(
    processes: &[ProcessDescriptor],
    quantum: i64,
    max_time: i64,
) -> Result<SimulationResult, SimulationError> {
    RoundRobinScheduler::new(SimulationConfig::new(quantum, max_time)).simulate(processes)
}
