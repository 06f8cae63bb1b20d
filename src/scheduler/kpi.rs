//! Simulation quality metrics (KPIs).
//!
//! Summarizes a completed simulation for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean(turnaround - burst) over completed processes |
//! | Avg Turnaround | Mean(completion - arrival) over completed processes |
//! | CPU Utilization | Busy slots / horizon × 100 |
//! | Context Switches | Hand-offs between different processes |
//! | Throughput | Completed processes per elapsed time unit |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Simulation performance indicators.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Processes that finished within the horizon.
    pub completed_count: usize,
    /// Processes still pending or running at the horizon.
    pub incomplete_count: usize,
    /// Mean waiting time over completed processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over completed processes.
    pub avg_turnaround_time: f64,
    /// Largest waiting time of any completed process.
    pub max_waiting_time: i64,
    /// Largest turnaround time of any completed process.
    pub max_turnaround_time: i64,
    /// Non-idle timeline slots.
    pub busy_units: usize,
    /// Idle timeline slots.
    pub idle_units: usize,
    /// CPU utilization percentage (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Hand-offs between two different processes.
    pub context_switches: usize,
    /// Completed processes per elapsed unit.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let completed_count = result.completed_count();
        let max_waiting_time = result
            .completed()
            .filter_map(|p| p.waiting_time())
            .max()
            .unwrap_or(0);
        let max_turnaround_time = result
            .completed()
            .filter_map(|p| p.turnaround_time())
            .max()
            .unwrap_or(0);

        let throughput = if result.total_time > 0 {
            completed_count as f64 / result.total_time as f64
        } else {
            0.0
        };

        Self {
            completed_count,
            incomplete_count: result.processes.len() - completed_count,
            avg_waiting_time: result.avg_waiting_time,
            avg_turnaround_time: result.avg_turnaround_time,
            max_waiting_time,
            max_turnaround_time,
            busy_units: result.timeline.busy_units(),
            idle_units: result.timeline.idle_units(),
            cpu_utilization: result.timeline.cpu_utilization(),
            context_switches: result.timeline.context_switches(),
            throughput,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
