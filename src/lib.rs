//! Round-robin CPU scheduling simulator.
//!
//! Computes the schedule produced by round-robin dispatching over a finite
//! set of simulated processes, given a fixed time quantum and a maximum
//! simulation horizon. The simulation is a pure, deterministic discrete-event
//! computation over integer time units.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `ProcessRuntimeState`,
//!   `Timeline`, `GanttSegment`, `SimulationResult`, `ProcessStats`
//! - **`scheduler`**: The simulator (`RoundRobinScheduler`, `simulate`),
//!   the stats deriver, and `SimulationKpi`
//! - **`validation`**: Input checks (quantum, horizon, burst/arrival ranges,
//!   duplicate IDs)
//! - **`generator`**: Random process descriptors for exercising the simulator
//!
//! # Example
//!
//! ```
//! use rr_schedule::models::ProcessDescriptor;
//! use rr_schedule::scheduler::simulate;
//!
//! let processes = vec![
//!     ProcessDescriptor::new(1, 0, 4),
//!     ProcessDescriptor::new(2, 0, 4),
//! ];
//! let result = simulate(&processes, 2, 8).unwrap();
//! assert_eq!(result.avg_waiting_time, 3.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4.3

pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
