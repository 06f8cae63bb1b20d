//! Process model.
//!
//! A process descriptor is the caller-owned input; the runtime state is the
//! simulator's private, per-run record derived from it.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A simulated process supplied by the caller.
///
/// Immutable input: the simulator never modifies descriptors, it builds
/// [`ProcessRuntimeState`] records from them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Process identifier, unique within one simulation run.
    pub id: u32,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
}

impl ProcessDescriptor {
    /// Creates a new process descriptor.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }
}

/// Final (or in-flight) state of one process during a simulation run.
///
/// # Invariants
/// - `0 <= remaining_time <= burst_time`
/// - `start_time` is set once, on the first dispatch
/// - `completion_time` is set once, when `remaining_time` reaches zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRuntimeState {
    /// Process identifier.
    pub id: u32,
    /// Arrival time (copied from the descriptor).
    pub arrival_time: i64,
    /// Burst time (copied from the descriptor).
    pub burst_time: i64,
    /// CPU time still required.
    pub remaining_time: i64,
    /// First dispatch time. `None` = never dispatched.
    pub start_time: Option<i64>,
    /// Time unit right after the last execution slice. `None` = not finished.
    pub completion_time: Option<i64>,
}

impl ProcessRuntimeState {
    /// Creates the initial runtime state for a descriptor.
    pub fn from_descriptor(descriptor: &ProcessDescriptor) -> Self {
        Self {
            id: descriptor.id,
            arrival_time: descriptor.arrival_time,
            burst_time: descriptor.burst_time,
            remaining_time: descriptor.burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    /// Whether the process has ever been dispatched.
    #[inline]
    pub fn started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process ran to completion within the horizon.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// CPU time consumed so far.
    #[inline]
    pub fn progress(&self) -> i64 {
        self.burst_time - self.remaining_time
    }

    /// Completion minus arrival. `None` if not completed.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Turnaround minus burst. `None` if not completed.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Records a dispatch at `time`. Only the first dispatch sets `start_time`.
    pub(crate) fn dispatch(&mut self, time: i64) {
        if !self.started() {
            self.start_time = Some(time);
        }
    }

    /// Runs the process for the unit starting at `time`.
    ///
    /// Returns `true` if this slice finished the process.
    pub(crate) fn execute(&mut self, time: i64) -> bool {
        self.remaining_time -= 1;
        if self.remaining_time == 0 {
            self.completion_time = Some(time + 1);
            true
        } else {
            false
        }
    }
}

impl From<&ProcessDescriptor> for ProcessRuntimeState {
    fn from(descriptor: &ProcessDescriptor) -> Self {
        Self::from_descriptor(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let p = ProcessDescriptor::new(7, 0, 1)
            .with_arrival_time(4)
            .with_burst_time(9);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 9);
    }

    #[test]
    fn test_runtime_state_initial() {
        let state = ProcessRuntimeState::from(&ProcessDescriptor::new(1, 2, 5));
        assert_eq!(state.remaining_time, 5);
        assert!(!state.started());
        assert!(!state.is_completed());
        assert_eq!(state.progress(), 0);
        assert_eq!(state.turnaround_time(), None);
        assert_eq!(state.waiting_time(), None);
    }

    #[test]
    fn test_dispatch_sets_start_once() {
        let mut state = ProcessRuntimeState::from(&ProcessDescriptor::new(1, 0, 3));
        state.dispatch(2);
        state.dispatch(6);
        assert_eq!(state.start_time, Some(2));
    }

    #[test]
    fn test_execute_until_complete() {
        let mut state = ProcessRuntimeState::from(&ProcessDescriptor::new(1, 1, 2));
        state.dispatch(3);
        assert!(!state.execute(3));
        assert_eq!(state.progress(), 1);
        assert!(state.execute(4));
        assert_eq!(state.completion_time, Some(5));
        // turnaround = 5 - 1, waiting = 4 - 2
        assert_eq!(state.turnaround_time(), Some(4));
        assert_eq!(state.waiting_time(), Some(2));
    }

    #[test]
    fn test_descriptor_serde() {
        let p = ProcessDescriptor::new(3, 1, 4);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"id":3,"arrival_time":1,"burst_time":4}"#);
    }
}
