//! Scheduling policies and run evaluation.
//!
//! Four single-CPU policies turn an unordered process set into an
//! execution timeline plus per-process waiting and turnaround times.
//!
//! | Policy | Preemptive | Decision |
//! |--------|-----------|----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst among arrived processes |
//! | Priority | no | static `(arrival, priority)` order |
//! | Round Robin | yes | FIFO ready queue, fixed quantum |
//!
//! Every run works on its own copy of the input. The caller's records
//! are never mutated, so the same input can be fed to several policies.
//!
//! # KPI
//!
//! `ScheduleSummary` reduces a run to averages and CPU-level metrics.

mod fcfs;
mod kpi;
mod policy;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::{summarize, Averages, ScheduleSummary};
pub use policy::{Policy, Quantum};
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use log::{debug, warn};
use serde::Serialize;

use crate::error::ScheduleError;
use crate::models::{Pid, Process, Timeline};
use crate::validation::validate_processes;

/// A single-CPU scheduling algorithm.
///
/// Implementations must not mutate `processes`; they return fresh
/// records with waiting and turnaround times filled in.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Algorithm name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Runs the whole process set to completion.
    ///
    /// Input is assumed valid; see [`run_schedule`] for the checked entry
    /// point.
    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome;
}

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleOutcome {
    /// Name of the policy that produced this run.
    pub policy: &'static str,
    /// One record per input process, in input order.
    pub processes: Vec<Process>,
    /// CPU slices in time order.
    pub timeline: Timeline,
}

impl ScheduleOutcome {
    pub(crate) fn new(policy: &'static str, processes: Vec<Process>, timeline: Timeline) -> Self {
        Self {
            policy,
            processes,
            timeline,
        }
    }

    /// Finds the result record for `pid`.
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Mean waiting and turnaround times.
    pub fn averages(&self) -> Result<Averages, ScheduleError> {
        summarize(&self.processes)
    }

    /// Full KPI set for this run.
    pub fn summary(&self) -> Result<ScheduleSummary, ScheduleError> {
        ScheduleSummary::calculate(self)
    }
}

impl Policy {
    /// Runs this policy over already-validated processes.
    fn dispatch(&self, processes: &[Process]) -> ScheduleOutcome {
        match *self {
            Policy::Fcfs => Fcfs.schedule(processes),
            Policy::Sjf => Sjf.schedule(processes),
            Policy::Priority => PriorityScheduling.schedule(processes),
            Policy::RoundRobin { quantum } => RoundRobin::new(quantum).schedule(processes),
        }
    }
}

/// Validates `processes` and schedules them under `policy`.
///
/// Nothing is simulated when validation fails.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{run_schedule, Policy};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let outcome = run_schedule(&Policy::Fcfs, &processes).unwrap();
///
/// assert_eq!(outcome.timeline.makespan(), 8);
/// assert_eq!(outcome.process(2).unwrap().waiting_time, 4);
/// ```
pub fn run_schedule(
    policy: &Policy,
    processes: &[Process],
) -> Result<ScheduleOutcome, ScheduleError> {
    validate(processes)?;
    debug!("scheduling {} processes with {}", processes.len(), policy.name());
    let outcome = policy.dispatch(processes);
    debug!(
        "{} finished at t={} in {} slices",
        policy.name(),
        outcome.timeline.makespan(),
        outcome.timeline.len()
    );
    Ok(outcome)
}

/// Runs all four policies over the same input.
///
/// Each policy gets an independent copy, so results are identical to
/// running them one at a time.
pub fn compare_policies(
    processes: &[Process],
    quantum: i64,
) -> Result<Vec<ScheduleOutcome>, ScheduleError> {
    let quantum = Quantum::new(quantum)?;
    validate(processes)?;
    Ok(Policy::all(quantum)
        .iter()
        .map(|policy| policy.dispatch(processes))
        .collect())
}

fn validate(processes: &[Process]) -> Result<(), ScheduleError> {
    validate_processes(processes).map_err(|errors| {
        warn!("rejected process set: {} validation errors", errors.len());
        ScheduleError::InvalidInput(errors)
    })
}

/// Clones the input and clears any previously computed fields.
pub(crate) fn working_copy(processes: &[Process]) -> Vec<Process> {
    let mut records = processes.to_vec();
    records.iter_mut().for_each(Process::reset);
    records
}
