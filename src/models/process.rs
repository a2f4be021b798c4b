//! Process model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival
//! time and needs `burst_time` units of CPU before it completes.
//!
//! # Time Representation
//! All times are abstract integer time units relative to the simulation
//! epoch (t=0).

use serde::{Deserialize, Serialize};

/// Caller-supplied process identifier. Carries no ordering significance.
pub type Pid = u32;

/// A process record.
///
/// The first four fields are input; the rest are written by a scheduling
/// run. Schedulers always work on clones, so the caller's records keep
/// their initial state and can be fed to another policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessRecord")]
pub struct Process {
    /// Unique process identifier within a run.
    pub pid: Pid,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Static priority (lower value = more important). Only used by
    /// priority scheduling.
    pub priority: i64,
    /// CPU time still owed to the process. Filled from `burst_time` when
    /// absent on input.
    pub remaining_time: i64,
    /// Time spent eligible but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

/// Serialized form of [`Process`] with the computed fields optional.
#[derive(Deserialize)]
struct ProcessRecord {
    pid: Pid,
    arrival_time: i64,
    burst_time: i64,
    #[serde(default)]
    priority: i64,
    remaining_time: Option<i64>,
    #[serde(default)]
    waiting_time: i64,
    #[serde(default)]
    turnaround_time: i64,
}

impl From<ProcessRecord> for Process {
    fn from(r: ProcessRecord) -> Self {
        Self {
            pid: r.pid,
            arrival_time: r.arrival_time,
            burst_time: r.burst_time,
            priority: r.priority,
            remaining_time: r.remaining_time.unwrap_or(r.burst_time),
            waiting_time: r.waiting_time,
            turnaround_time: r.turnaround_time,
        }
    }
}

impl Process {
    /// Creates a process with priority 0 and no CPU time consumed.
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Records completion at `time`.
    ///
    /// Turnaround is measured from arrival; waiting is whatever part of it
    /// was not spent on the CPU.
    pub fn finish_at(&mut self, time: i64) {
        self.remaining_time = 0;
        self.turnaround_time = time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Grants up to `slice` units of CPU and returns the amount consumed.
    pub fn consume(&mut self, slice: i64) -> i64 {
        let used = self.remaining_time.min(slice);
        self.remaining_time -= used;
        used
    }

    /// Whether the process has received all of its CPU time.
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Completion time implied by the recorded turnaround.
    #[inline]
    pub fn completion_time(&self) -> i64 {
        self.arrival_time + self.turnaround_time
    }

    /// Clears computed fields, restoring the record to its input state.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }
}
