//! Simulation result model.
//!
//! A simulation result is the complete, immutable outcome of one run: the
//! CPU timeline, the terminal state of every process, and the averages over
//! completed processes.

use serde::{Deserialize, Serialize};

use super::{ProcessRuntimeState, Timeline};

/// Outcome of one round-robin simulation.
///
/// Processes are listed in dispatch-admission order (ascending arrival time,
/// ties in input order). Processes that did not finish before the horizon
/// keep `completion_time == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// CPU occupancy, one slot per unit of the horizon.
    pub timeline: Timeline,
    /// Terminal state of every input process.
    pub processes: Vec<ProcessRuntimeState>,
    /// Mean waiting time over completed processes (0.0 if none).
    pub avg_waiting_time: f64,
    /// Mean turnaround time over completed processes (0.0 if none).
    pub avg_turnaround_time: f64,
    /// Time units actually simulated (< horizon if everything finished early).
    pub total_time: i64,
}

/// Per-process statistics row.
///
/// `completion_time`, `turnaround_time` and `waiting_time` are `None` when the
/// process did not complete within the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub id: u32,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Completion time.
    pub completion_time: Option<i64>,
    /// Completion minus arrival.
    pub turnaround_time: Option<i64>,
    /// Turnaround minus burst.
    pub waiting_time: Option<i64>,
}

impl From<&ProcessRuntimeState> for ProcessStats {
    fn from(state: &ProcessRuntimeState) -> Self {
        Self {
            id: state.id,
            arrival_time: state.arrival_time,
            burst_time: state.burst_time,
            completion_time: state.completion_time,
            turnaround_time: state.turnaround_time(),
            waiting_time: state.waiting_time(),
        }
    }
}

impl SimulationResult {
    /// Finds the final state of a process by id.
    pub fn process(&self, id: u32) -> Option<&ProcessRuntimeState> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Processes that finished within the horizon.
    pub fn completed(&self) -> impl Iterator<Item = &ProcessRuntimeState> {
        self.processes.iter().filter(|p| p.is_completed())
    }

    /// Number of processes that finished within the horizon.
    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    /// Whether every process finished.
    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(|p| p.is_completed())
    }

    /// Per-process statistics rows, in the same order as `processes`.
    pub fn stats(&self) -> Vec<ProcessStats> {
        crate::scheduler::process_stats(&self.processes)
    }
}
