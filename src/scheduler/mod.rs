//! Round-robin simulator, statistics, and KPI evaluation.
//!
//! # Algorithm
//!
//! `RoundRobinScheduler` advances a discrete clock one unit at a time,
//! admitting arrivals into a FIFO ready queue and preempting the running
//! process when its quantum is exhausted.
//!
//! # KPI
//!
//! `SimulationKpi` summarizes a run: averages, maxima, CPU utilization,
//! context switches, and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod round_robin;
mod stats;

pub use kpi::SimulationKpi;
pub use round_robin::{simulate, RoundRobinScheduler, SimulationConfig, SimulationRequest};
pub use stats::process_stats;
