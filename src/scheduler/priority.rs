//! Non-preemptive priority scheduling with a static order.
//!
//! Processes are sorted once by `(arrival_time, priority)` and then run
//! exactly like FCFS. Priority only decides between processes that
//! arrive at the same instant; it is not re-evaluated when the CPU frees
//! up. A process that arrives later never overtakes an earlier one, even
//! with a better priority.

use super::fcfs::run_in_order;
use super::{ScheduleOutcome, SchedulingAlgorithm};
use crate::models::Process;

/// Static-order priority scheduler. Lower priority value runs first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl SchedulingAlgorithm for PriorityScheduling {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].priority));
        run_in_order(self.name(), processes, &order)
    }
}
