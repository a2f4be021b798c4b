//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order. Equal arrivals keep
//! their input order.

use super::{working_copy, ScheduleOutcome, SchedulingAlgorithm};
use crate::models::{Process, TimelineBuilder};

/// First-Come-First-Served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);
        run_in_order(self.name(), processes, &order)
    }
}

/// Runs each process to completion in the given order.
///
/// The CPU idles until a process arrives if it gets there early. Shared
/// by every non-preemptive policy whose order is fixed up front.
pub(super) fn run_in_order(
    policy: &'static str,
    processes: &[Process],
    order: &[usize],
) -> ScheduleOutcome {
    let mut records = working_copy(processes);
    let mut cpu = TimelineBuilder::new();

    for &i in order {
        let p = &mut records[i];
        cpu.idle_until(p.arrival_time);
        let end = cpu.run(p.pid, p.burst_time);
        p.finish_at(end);
    }

    ScheduleOutcome::new(policy, records, cpu.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let out = Fcfs.schedule(&processes);

        assert_eq!(
            out.timeline.slices,
            vec![ExecutionSlice::new(1, 0, 5), ExecutionSlice::new(2, 5, 8)]
        );
        let p1 = out.process(1).unwrap();
        let p2 = out.process(2).unwrap();
        assert_eq!((p1.waiting_time, p1.turnaround_time), (0, 5));
        assert_eq!((p2.waiting_time, p2.turnaround_time), (4, 7));
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![Process::new(1, 6, 2), Process::new(2, 0, 3)];
        let out = Fcfs.schedule(&processes);
        assert_eq!(out.timeline.slices[0].pid, 2);
        assert_eq!(out.timeline.slices[1], ExecutionSlice::new(1, 6, 8));
        // Results stay in input order
        assert_eq!(out.processes[0].pid, 1);
    }

    #[test]
    fn test_fcfs_ties_keep_input_order() {
        let processes = vec![
            Process::new(9, 0, 1),
            Process::new(3, 0, 1),
            Process::new(5, 0, 1),
        ];
        let out = Fcfs.schedule(&processes);
        let pids: Vec<_> = out.timeline.slices.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![9, 3, 5]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new(1, 2, 2), Process::new(2, 10, 1)];
        let out = Fcfs.schedule(&processes);
        assert_eq!(
            out.timeline.slices,
            vec![ExecutionSlice::new(1, 2, 4), ExecutionSlice::new(2, 10, 11)]
        );
        assert_eq!(out.process(2).unwrap().waiting_time, 0);
        assert_eq!(out.timeline.idle_time(), 8);
    }

    #[test]
    fn test_fcfs_does_not_touch_input() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let before = processes.clone();
        let _ = Fcfs.schedule(&processes);
        assert_eq!(processes, before);
    }
}
