//! Process scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input record plus computed waiting/turnaround times |
//! | `ExecutionSlice` | One Gantt entry: `(pid, start, end)` |
//! | `Timeline` | Ordered, non-overlapping slices of a run |
//! | `TimelineBuilder` | Simulation clock that records slices as it advances |

mod process;
mod timeline;

pub use process::{Pid, Process};
pub use timeline::{ExecutionSlice, Timeline, TimelineBuilder};
