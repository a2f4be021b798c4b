//! Input validation for process sets.
//!
//! Checks a process set before any scheduling work starts. Detects:
//! - Duplicate pids (results are written back by pid)
//! - Negative arrival times
//! - Non-positive burst times
//! - Sets whose clock would run past `i64::MAX`
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time, or a negative amount.
    NonPositiveBurst,
    /// The latest arrival plus all bursts does not fit in `i64`.
    TimeOverflow,
    /// A required field is absent.
    MissingField,
    /// A field could not be read as a number.
    Malformed,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();
    let mut latest_arrival: i64 = 0;
    let mut total_burst: Option<i64> = Some(0);

    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.pid, p.burst_time),
            ));
        } else {
            total_burst = total_burst.and_then(|t| t.checked_add(p.burst_time));
        }
        latest_arrival = latest_arrival.max(p.arrival_time);
    }

    // No schedule ends later than the last arrival plus every burst.
    if total_burst
        .and_then(|t| t.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Process set runs past the largest representable time",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
