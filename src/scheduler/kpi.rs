//! Schedule quality metrics (KPIs).
//!
//! Reduces a completed run to aggregate statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of per-process waiting time |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Response | Mean of first dispatch - arrival |
//! | Max Waiting | Largest single waiting time |
//! | Makespan | End of the last slice |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |
//! | Context Switches | CPU hand-overs between different processes |

use serde::Serialize;

use super::ScheduleOutcome;
use crate::error::ScheduleError;
use crate::models::Process;

/// Mean waiting and turnaround times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    /// Mean waiting time.
    pub waiting_time: f64,
    /// Mean turnaround time.
    pub turnaround_time: f64,
}

/// Averages the computed times of a finished process set.
///
/// Returns `EmptyProcessSet` instead of dividing by zero.
pub fn summarize(processes: &[Process]) -> Result<Averages, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessSet);
    }
    let n = processes.len() as f64;
    // Each time fits in i64, their sum may not
    let total_waiting: i128 = processes.iter().map(|p| p.waiting_time as i128).sum();
    let total_turnaround: i128 = processes.iter().map(|p| p.turnaround_time as i128).sum();

    Ok(Averages {
        waiting_time: total_waiting as f64 / n,
        turnaround_time: total_turnaround as f64 / n,
    })
}

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean time from arrival to first dispatch.
    pub avg_response_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// End of the last slice.
    pub makespan: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Hand-overs between different processes.
    pub context_switches: usize,
}

impl ScheduleSummary {
    /// Computes KPIs from a completed run.
    pub fn calculate(outcome: &ScheduleOutcome) -> Result<Self, ScheduleError> {
        let averages = summarize(&outcome.processes)?;
        let timeline = &outcome.timeline;
        let n = outcome.processes.len();

        // A process that never ran counts as zero response.
        let total_response: i128 = outcome
            .processes
            .iter()
            .map(|p| {
                timeline
                    .first_start(p.pid)
                    .map(|s| (s - p.arrival_time) as i128)
                    .unwrap_or(0)
            })
            .sum();

        let max_waiting_time = outcome
            .processes
            .iter()
            .map(|p| p.waiting_time)
            .max()
            .unwrap_or(0);

        let makespan = timeline.makespan();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                timeline.busy_time() as f64 / makespan as f64,
                n as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_waiting_time: averages.waiting_time,
            avg_turnaround_time: averages.turnaround_time,
            avg_response_time: total_response as f64 / n as f64,
            max_waiting_time,
            makespan,
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        })
    }
}
