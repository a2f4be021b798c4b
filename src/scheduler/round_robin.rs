//! Round robin.
//!
//! # Algorithm
//!
//! 1. If nothing is ready, jump the clock to the next arrival.
//! 2. Admit every process that has arrived by now, in arrival order.
//! 3. Run the front of the ready queue for `min(remaining, quantum)`.
//! 4. If it still needs CPU, admit arrivals up to the new time first and
//!    then requeue it at the back. Otherwise record its completion.
//!
//! A process that arrives exactly when a slice ends is therefore queued
//! ahead of the process that was just preempted.

use std::collections::VecDeque;

use super::{working_copy, Quantum, ScheduleOutcome, SchedulingAlgorithm};
use crate::models::{Process, TimelineBuilder};

/// Round-robin scheduler with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    /// Creates a round-robin scheduler.
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    /// The time quantum.
    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let quantum = self.quantum.get();
        let mut records = working_copy(processes);

        let mut incoming: Vec<usize> = (0..records.len()).collect();
        incoming.sort_by_key(|&i| records[i].arrival_time);
        let mut incoming: VecDeque<usize> = incoming.into();

        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut cpu = TimelineBuilder::new();

        while !incoming.is_empty() || !ready.is_empty() {
            if ready.is_empty() {
                if let Some(&next) = incoming.front() {
                    cpu.idle_until(records[next].arrival_time);
                }
            }
            admit(&mut incoming, &mut ready, &records, cpu.now());

            let Some(i) = ready.pop_front() else {
                continue;
            };

            let (pid, used) = {
                let p = &mut records[i];
                (p.pid, p.consume(quantum))
            };
            let end = cpu.run(pid, used);

            if records[i].is_finished() {
                records[i].finish_at(end);
            } else {
                admit(&mut incoming, &mut ready, &records, end);
                ready.push_back(i);
            }
        }

        ScheduleOutcome::new(self.name(), records, cpu.finish())
    }
}

/// Moves every process that has arrived by `now` onto the ready queue.
fn admit(
    incoming: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    records: &[Process],
    now: i64,
) {
    while let Some(&next) = incoming.front() {
        if records[next].arrival_time > now {
            break;
        }
        incoming.pop_front();
        ready.push_back(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    fn rr(quantum: i64) -> RoundRobin {
        RoundRobin::new(Quantum::new(quantum).unwrap())
    }

    #[test]
    fn test_round_robin_basic() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
        let out = rr(2).schedule(&processes);
        assert_eq!(
            out.timeline.slices,
            vec![
                ExecutionSlice::new(1, 0, 2),
                ExecutionSlice::new(2, 2, 4),
                ExecutionSlice::new(1, 4, 6),
                ExecutionSlice::new(2, 6, 7),
            ]
        );
        let p1 = out.process(1).unwrap();
        let p2 = out.process(2).unwrap();
        assert_eq!((p1.waiting_time, p1.turnaround_time), (2, 6));
        assert_eq!((p2.waiting_time, p2.turnaround_time), (3, 6));
    }

    #[test]
    fn test_new_arrival_queued_before_preempted() {
        // P3 arrives at t=2, the instant P1 is preempted, so it is queued
        // behind P2 but ahead of P1.
        let processes = vec![
            Process::new(1, 0, 4),
            Process::new(2, 0, 4),
            Process::new(3, 2, 1),
        ];
        let out = rr(2).schedule(&processes);
        let pids: Vec<_> = out.timeline.slices.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![1, 2, 3, 1, 2]);
        assert_eq!(out.process(3).unwrap().waiting_time, 2);
    }

    #[test]
    fn test_quantum_larger_than_bursts_matches_fcfs() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 1, 2)];
        let out = rr(10).schedule(&processes);
        assert_eq!(
            out.timeline.slices,
            vec![ExecutionSlice::new(1, 0, 3), ExecutionSlice::new(2, 3, 5)]
        );
    }

    #[test]
    fn test_round_robin_idle_until_next_arrival() {
        let processes = vec![Process::new(1, 0, 1), Process::new(2, 5, 3)];
        let out = rr(2).schedule(&processes);
        assert_eq!(
            out.timeline.slices,
            vec![
                ExecutionSlice::new(1, 0, 1),
                ExecutionSlice::new(2, 5, 7),
                ExecutionSlice::new(2, 7, 8),
            ]
        );
        assert_eq!(out.process(2).unwrap().waiting_time, 0);
        assert_eq!(out.timeline.context_switches(), 1);
    }

    #[test]
    fn test_round_robin_slices_bounded_by_quantum() {
        let processes = vec![
            Process::new(1, 0, 7),
            Process::new(2, 0, 5),
            Process::new(3, 2, 4),
        ];
        let out = rr(3).schedule(&processes);
        assert!(out.timeline.slices.iter().all(|s| s.duration() <= 3));
        for p in &processes {
            let total: i64 = out.timeline.slices_for(p.pid).iter().map(|s| s.duration()).sum();
            assert_eq!(total, p.burst_time);
        }
    }

    #[test]
    fn test_round_robin_leaves_input_untouched() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
        let before = processes.clone();
        let _ = rr(1).schedule(&processes);
        assert_eq!(processes, before);
        assert_eq!(processes[0].remaining_time, 4);
    }
}
