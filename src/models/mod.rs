//! Round-robin simulation domain models.
//!
//! Provides the input descriptors, the per-run process state, the CPU
//! timeline and the result records consumed by presentation layers.
//!
//! # Domain Mappings
//!
//! | rr-schedule | Operating System | Presentation |
//! |-------------|------------------|--------------|
//! | ProcessDescriptor | Process (PCB subset) | Input row |
//! | Timeline | CPU occupancy trace | Gantt chart |
//! | ProcessStats | Accounting record | Stats table row |

mod process;
mod result;
mod timeline;

pub use process::{ProcessDescriptor, ProcessRuntimeState};
pub use result::{ProcessStats, SimulationResult};
pub use timeline::{GanttSegment, Timeline};
