//! Errors reported at the scheduling boundary.
//!
//! Every error is recoverable: the caller fixes its input and calls
//! again. Nothing here aborts the host program.

use std::fmt;

use crate::validation::ValidationError;

/// Failure of a scheduling request.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// One or more process attributes are missing, non-numeric, or out of
    /// range. No simulation was run.
    InvalidInput(Vec<ValidationError>),
    /// Round robin was selected without a positive time quantum.
    MissingQuantum,
    /// No scheduling policy was named.
    NoPolicySelected,
    /// The named policy is not one of the supported four.
    UnknownPolicy(String),
    /// Aggregation was asked for over zero processes.
    EmptyProcessSet,
}

impl ScheduleError {
    /// Builds an `InvalidInput` error from a single message.
    pub(crate) fn invalid(error: ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            Self::MissingQuantum => {
                write!(f, "round robin requires a positive integer time quantum")
            }
            Self::NoPolicySelected => write!(f, "no scheduling policy selected"),
            Self::UnknownPolicy(label) => write!(f, "unknown scheduling policy '{label}'"),
            Self::EmptyProcessSet => write!(f, "no processes to summarize"),
        }
    }
}

impl std::error::Error for ScheduleError {}
