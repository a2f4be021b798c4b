//! Scheduling requests.
//!
//! A request carries everything a run needs as explicit values: the
//! policy label, the quantum and the raw process rows. Rows may come
//! from a form, a file or JSON, so every field is optional until the
//! request is resolved.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Pid, Process};
use crate::scheduler::{run_schedule, Policy, ScheduleOutcome};
use crate::validation::{ValidationError, ValidationErrorKind};

/// One unresolved process row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identifier.
    pub pid: Option<i64>,
    /// Arrival time.
    pub arrival_time: Option<i64>,
    /// Burst time.
    pub burst_time: Option<i64>,
    /// Priority. Missing means 0.
    pub priority: Option<i64>,
}

impl ProcessSpec {
    /// Creates a fully specified row with priority 0.
    pub fn new(pid: i64, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: Some(pid),
            arrival_time: Some(arrival_time),
            burst_time: Some(burst_time),
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Resolves the row into a process.
    ///
    /// `row` is the zero-based row index used in error messages.
    pub fn to_process(&self, row: usize) -> Result<Process, ValidationError> {
        let pid = require(self.pid, row, "pid")?;
        let pid = Pid::try_from(pid).map_err(|_| {
            ValidationError::new(
                ValidationErrorKind::Malformed,
                format!("Row {row}: pid {pid} is out of range"),
            )
        })?;
        let arrival = require(self.arrival_time, row, "arrival_time")?;
        let burst = require(self.burst_time, row, "burst_time")?;

        Ok(Process::new(pid, arrival, burst).with_priority(self.priority.unwrap_or(0)))
    }
}

fn require(value: Option<i64>, row: usize, field: &str) -> Result<i64, ValidationError> {
    value.ok_or_else(|| {
        ValidationError::new(
            ValidationErrorKind::MissingField,
            format!("Row {row}: missing {field}"),
        )
    })
}

/// A scheduling request.
///
/// # Example
///
/// ```
/// use cpu_schedule::request::ScheduleRequest;
///
/// let json = r#"{
///     "algorithm": "Round Robin",
///     "quantum": 2,
///     "processes": [
///         {"pid": 1, "arrival_time": 0, "burst_time": 4},
///         {"pid": 2, "arrival_time": 1, "burst_time": 3}
///     ]
/// }"#;
///
/// let outcome = ScheduleRequest::from_json(json).unwrap().run().unwrap();
/// assert_eq!(outcome.timeline.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Policy label, e.g. "FCFS" or "Round Robin".
    #[serde(default, alias = "policy")]
    pub algorithm: Option<String>,
    /// Round-robin time quantum. Ignored by other policies.
    #[serde(default)]
    pub quantum: Option<i64>,
    /// Process rows.
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,
}

impl ScheduleRequest {
    /// Creates a request for the given policy label.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: Some(algorithm.into()),
            ..Default::default()
        }
    }

    /// Parses a request from JSON.
    ///
    /// Malformed JSON and non-numeric fields become `InvalidInput`.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("unreadable schedule request: {e}");
            ScheduleError::invalid(ValidationError::new(
                ValidationErrorKind::Malformed,
                e.to_string(),
            ))
        })
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Adds a process row.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }

    /// Resolves the request into a policy and a process set.
    ///
    /// Rows are checked before the policy, so a request with bad rows
    /// reports `InvalidInput` even if no policy was chosen.
    pub fn into_parts(self) -> Result<(Policy, Vec<Process>), ScheduleError> {
        let mut processes = Vec::with_capacity(self.processes.len());
        let mut errors = Vec::new();
        for (row, spec) in self.processes.iter().enumerate() {
            match spec.to_process(row) {
                Ok(p) => processes.push(p),
                Err(e) => errors.push(e),
            }
        }
        if !errors.is_empty() {
            return Err(ScheduleError::InvalidInput(errors));
        }

        let label = self
            .algorithm
            .as_deref()
            .ok_or(ScheduleError::NoPolicySelected)?;
        let policy = Policy::from_label(label, self.quantum)?;

        Ok((policy, processes))
    }

    /// Resolves and runs the request.
    pub fn run(self) -> Result<ScheduleOutcome, ScheduleError> {
        let (policy, processes) = self.into_parts()?;
        run_schedule(&policy, &processes)
    }
}
