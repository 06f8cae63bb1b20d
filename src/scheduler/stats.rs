//! Per-process statistics derivation.

use crate::models::{ProcessRuntimeState, ProcessStats};

/// Maps final runtime states to statistics rows, preserving order.
///
/// `turnaround = completion - arrival`, `waiting = turnaround - burst`;
/// both are `None` for processes that did not complete.
pub fn process_stats(processes: &[ProcessRuntimeState]) -> Vec<ProcessStats> {
    processes.iter().map(ProcessStats::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;

    #[test]
    fn test_stats_formulas() {
        let mut done = ProcessRuntimeState::from(&ProcessDescriptor::new(1, 2, 3));
        done.remaining_time = 0;
        done.start_time = Some(4);
        done.completion_time = Some(9);
        let pending = ProcessRuntimeState::from(&ProcessDescriptor::new(2, 0, 4));

        let stats = process_stats(&[done, pending]);
        assert_eq!(stats[0].id, 1);
        assert_eq!(stats[0].completion_time, Some(9));
        assert_eq!(stats[0].turnaround_time, Some(7));
        assert_eq!(stats[0].waiting_time, Some(4));
        assert_eq!(stats[1].turnaround_time, None);
        assert_eq!(stats[1].waiting_time, None);
    }

    #[test]
    fn test_stats_empty() {
        assert!(process_stats(&[]).is_empty());
    }
}
