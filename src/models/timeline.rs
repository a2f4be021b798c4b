//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of CPU slices granted during one
//! scheduling run. With a single CPU, slices never overlap.

use serde::{Deserialize, Serialize};

use super::Pid;

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub pid: Pid,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(pid: Pid, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// CPU time granted in this slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A complete execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in non-decreasing start order.
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makespan: end of the last slice. Zero for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// All slices granted to `pid`, in time order.
    pub fn slices_for(&self, pid: Pid) -> Vec<&ExecutionSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Start of the first slice granted to `pid`.
    pub fn first_start(&self, pid: Pid) -> Option<i64> {
        self.slices.iter().find(|s| s.pid == pid).map(|s| s.start)
    }

    /// End of the last slice granted to `pid`.
    pub fn completion_time(&self, pid: Pid) -> Option<i64> {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.end)
            .max()
    }

    /// Total CPU time handed out.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration()).sum()
    }

    /// CPU idle time between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of times the CPU passes from one process to a different one.
    ///
    /// A process resumed right after its own slice does not count.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Checks the single-CPU shape: every slice non-empty, slices sorted
    /// by start and pairwise disjoint.
    pub fn is_well_formed(&self) -> bool {
        self.slices.iter().all(|s| s.start < s.end)
            && self.slices.windows(2).all(|w| w[0].end <= w[1].start)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no CPU time was handed out.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Appends slices while advancing the simulation clock.
///
/// Every scheduling policy drives the CPU through one of these, so the
/// clock and the timeline cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    clock: i64,
    slices: Vec<ExecutionSlice>,
}

impl TimelineBuilder {
    /// Starts a builder at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.clock
    }

    /// Leaves the CPU idle until `time`. Never moves the clock backwards.
    pub fn idle_until(&mut self, time: i64) {
        self.clock = self.clock.max(time);
    }

    /// Runs `pid` for `duration` units starting now and returns the end time.
    ///
    /// Zero-length runs advance nothing and leave no slice.
    pub fn run(&mut self, pid: Pid, duration: i64) -> i64 {
        if duration > 0 {
            let start = self.clock;
            self.clock += duration;
            self.slices.push(ExecutionSlice::new(pid, start, self.clock));
            log::trace!("dispatch pid={pid} [{start}, {})", self.clock);
        }
        self.clock
    }

    /// Consumes the builder and returns the finished timeline.
    pub fn finish(self) -> Timeline {
        Timeline {
            slices: self.slices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut b = TimelineBuilder::new();
        b.run(1, 2);
        b.run(2, 2);
        b.run(1, 2);
        b.idle_until(8);
        b.run(3, 1);
        b.finish()
    }

    #[test]
    fn test_builder_advances_clock() {
        let mut b = TimelineBuilder::new();
        assert_eq!(b.now(), 0);
        assert_eq!(b.run(1, 5), 5);
        b.idle_until(3);
        assert_eq!(b.now(), 5);
        b.idle_until(7);
        assert_eq!(b.run(2, 1), 8);

        let t = b.finish();
        assert_eq!(
            t.slices,
            vec![ExecutionSlice::new(1, 0, 5), ExecutionSlice::new(2, 7, 8)]
        );
    }

    #[test]
    fn test_zero_length_run_is_dropped() {
        let mut b = TimelineBuilder::new();
        assert_eq!(b.run(1, 0), 0);
        assert!(b.finish().is_empty());
    }

    #[test]
    fn test_makespan_and_idle() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 9);
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_slices_for_pid() {
        let t = sample_timeline();
        let p1 = t.slices_for(1);
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[1].start, 4);
        assert_eq!(t.first_start(2), Some(2));
        assert_eq!(t.completion_time(1), Some(6));
        assert_eq!(t.completion_time(99), None);
    }

    #[test]
    fn test_context_switches() {
        let t = sample_timeline();
        assert_eq!(t.context_switches(), 3);

        let mut b = TimelineBuilder::new();
        b.run(1, 2);
        b.run(1, 2);
        assert_eq!(b.finish().context_switches(), 0);
    }

    #[test]
    fn test_well_formed() {
        assert!(sample_timeline().is_well_formed());
        assert!(Timeline::new().is_well_formed());

        let overlapping = Timeline {
            slices: vec![ExecutionSlice::new(1, 0, 5), ExecutionSlice::new(2, 4, 6)],
        };
        assert!(!overlapping.is_well_formed());

        let empty_slice = Timeline {
            slices: vec![ExecutionSlice::new(1, 3, 3)],
        };
        assert!(!empty_slice.is_well_formed());
    }
}
