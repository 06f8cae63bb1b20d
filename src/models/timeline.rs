//! CPU occupancy timeline.
//!
//! One slot per time unit of the horizon. A slot holds the id of the process
//! occupying the CPU during that unit, or `None` when the CPU is idle.
//!
//! Contiguous equal slots group into [`GanttSegment`]s, the block view used
//! by Gantt-style renderers.

use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};

/// Per-unit CPU occupancy over the simulation horizon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slots: Vec<Option<u32>>,
}

/// A contiguous block of identical timeline slots, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Occupying process. `None` = idle.
    pub process_id: Option<u32>,
    /// First time unit of the block.
    pub start: i64,
    /// Time unit right after the block.
    pub end: i64,
}

impl GanttSegment {
    /// Block length in time units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the CPU is idle for this block.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }
}

impl Timeline {
    /// Creates an all-idle timeline of `len` units.
    pub fn idle(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Like [`Timeline::idle`], but reports allocation failure instead of aborting.
    pub fn try_idle(len: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(len)?;
        slots.resize(len, None);
        Ok(Self { slots })
    }

    pub(crate) fn record(&mut self, time: usize, process_id: Option<u32>) {
        self.slots[time] = process_id;
    }

    /// Number of slots (the horizon).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timeline has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Occupant of time unit `time`. Outer `None` = out of range.
    pub fn slot(&self, time: usize) -> Option<Option<u32>> {
        self.slots.get(time).copied()
    }

    /// All slots in time order.
    pub fn slots(&self) -> &[Option<u32>] {
        &self.slots
    }

    /// Number of non-idle slots.
    pub fn busy_units(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of idle slots.
    pub fn idle_units(&self) -> usize {
        self.len() - self.busy_units()
    }

    /// Slots occupied by `process_id`.
    pub fn units_for(&self, process_id: u32) -> usize {
        self.slots
            .iter()
            .filter(|s| **s == Some(process_id))
            .count()
    }

    /// CPU utilization as a percentage: busy / total × 100.
    ///
    /// Returns `0.0` for an empty timeline.
    pub fn cpu_utilization(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.busy_units() as f64 / self.len() as f64 * 100.0
    }

    /// Groups contiguous equal slots into blocks, idle blocks included.
    pub fn segments(&self) -> Vec<GanttSegment> {
        let mut segments: Vec<GanttSegment> = Vec::new();
        for (t, &slot) in self.slots.iter().enumerate() {
            let t = t as i64;
            match segments.last_mut() {
                Some(last) if last.process_id == slot => last.end = t + 1,
                _ => segments.push(GanttSegment {
                    process_id: slot,
                    start: t,
                    end: t + 1,
                }),
            }
        }
        segments
    }

    /// Number of hand-offs between two different processes.
    ///
    /// Idle gaps are skipped: `1, idle, 2` counts one switch, `1, idle, 1`
    /// counts none.
    pub fn context_switches(&self) -> usize {
        let mut previous: Option<u32> = None;
        let mut switches = 0;
        for id in self.slots.iter().flatten() {
            if previous.is_some_and(|p| p != *id) {
                switches += 1;
            }
            previous = Some(*id);
        }
        switches
    }
}

impl From<Vec<Option<u32>>> for Timeline {
    fn from(slots: Vec<Option<u32>>) -> Self {
        Self { slots }
    }
}
