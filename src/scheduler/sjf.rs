//! Shortest-Job-First, non-preemptive.
//!
//! At every decision point the CPU goes to the arrived process with the
//! smallest burst. When nothing has arrived, the clock jumps to the
//! earliest pending arrival.

use super::{working_copy, ScheduleOutcome, SchedulingAlgorithm};
use crate::models::{Process, TimelineBuilder};

/// Non-preemptive Shortest-Job-First scheduler.
///
/// Equal bursts go to whichever process comes first in the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingAlgorithm for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut records = working_copy(processes);
        let mut pending: Vec<usize> = (0..records.len()).collect();
        let mut cpu = TimelineBuilder::new();

        while !pending.is_empty() {
            let now = cpu.now();
            // min_by_key keeps the first of equal minima
            let shortest = pending
                .iter()
                .enumerate()
                .filter(|&(_, &i)| records[i].arrival_time <= now)
                .min_by_key(|&(_, &i)| records[i].burst_time)
                .map(|(slot, _)| slot);

            match shortest {
                Some(slot) => {
                    let i = pending.remove(slot);
                    let p = &mut records[i];
                    let end = cpu.run(p.pid, p.burst_time);
                    p.finish_at(end);
                }
                None => {
                    if let Some(next) = pending.iter().map(|&i| records[i].arrival_time).min() {
                        cpu.idle_until(next);
                    }
                }
            }
        }

        ScheduleOutcome::new(self.name(), records, cpu.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    #[test]
    fn test_sjf_non_preemptive() {
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 2),
        ];
        let out = Sjf.schedule(&processes);
        assert_eq!(
            out.timeline.slices,
            vec![
                ExecutionSlice::new(1, 0, 8),
                ExecutionSlice::new(3, 8, 10),
                ExecutionSlice::new(2, 10, 14),
            ]
        );
        assert_eq!(out.process(3).unwrap().waiting_time, 6);
        assert_eq!(out.process(2).unwrap().waiting_time, 9);
        assert_eq!(out.process(2).unwrap().turnaround_time, 13);
    }

    #[test]
    fn test_sjf_tie_goes_to_input_order() {
        let processes = vec![
            Process::new(4, 0, 3),
            Process::new(2, 0, 3),
            Process::new(7, 0, 1),
        ];
        let out = Sjf.schedule(&processes);
        let pids: Vec<_> = out.timeline.slices.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![7, 4, 2]);
    }

    #[test]
    fn test_sjf_skips_idle_cpu() {
        let processes = vec![Process::new(1, 5, 3), Process::new(2, 20, 1)];
        let out = Sjf.schedule(&processes);
        assert_eq!(
            out.timeline.slices,
            vec![ExecutionSlice::new(1, 5, 8), ExecutionSlice::new(2, 20, 21)]
        );
        assert_eq!(out.process(1).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_sjf_picks_among_arrived_only() {
        // At t=0 only the long job is available; the short one must wait.
        let processes = vec![Process::new(1, 0, 10), Process::new(2, 1, 1)];
        let out = Sjf.schedule(&processes);
        assert_eq!(out.timeline.slices[0].pid, 1);
        assert_eq!(out.process(2).unwrap().waiting_time, 9);
    }

    #[test]
    fn test_sjf_empty() {
        let out = Sjf.schedule(&[]);
        assert!(out.timeline.is_empty());
        assert!(out.processes.is_empty());
    }
}
