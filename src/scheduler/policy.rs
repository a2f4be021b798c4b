//! Policy selection.
//!
//! A closed set of four policies. Round robin carries its quantum, so a
//! round-robin policy without a valid quantum cannot be constructed.

use serde::Serialize;

use crate::error::ScheduleError;

/// Round-robin time quantum. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantum(i64);

impl Quantum {
    /// Creates a quantum, rejecting zero and negative values.
    pub fn new(units: i64) -> Result<Self, ScheduleError> {
        if units > 0 {
            Ok(Self(units))
        } else {
            Err(ScheduleError::MissingQuantum)
        }
    }

    /// Quantum length in time units.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

/// Scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Non-preemptive priority: static `(arrival, priority)` order.
    Priority,
    /// Round robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous CPU time per slice.
        quantum: Quantum,
    },
}

impl Policy {
    /// Creates a round-robin policy.
    pub fn round_robin(quantum: i64) -> Result<Self, ScheduleError> {
        Ok(Self::RoundRobin {
            quantum: Quantum::new(quantum)?,
        })
    }

    /// Resolves a human-readable policy label.
    ///
    /// Accepts "FCFS", "SJF", "Priority" / "Priority Scheduling" and
    /// "Round Robin" / "RR", ignoring case, spaces, `-` and `_`.
    /// `quantum` is only consulted for round robin.
    pub fn from_label(label: &str, quantum: Option<i64>) -> Result<Self, ScheduleError> {
        let key: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "" => Err(ScheduleError::NoPolicySelected),
            "fcfs" | "firstcomefirstserved" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "shortestjobfirst" => Ok(Self::Sjf),
            "priority" | "priorityscheduling" => Ok(Self::Priority),
            "rr" | "roundrobin" => {
                let quantum = quantum.ok_or(ScheduleError::MissingQuantum)?;
                Self::round_robin(quantum)
            }
            _ => Err(ScheduleError::UnknownPolicy(label.trim().to_string())),
        }
    }

    /// Short policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// All four policies, round robin using `quantum`.
    pub fn all(quantum: Quantum) -> [Policy; 4] {
        [
            Self::Fcfs,
            Self::Sjf,
            Self::Priority,
            Self::RoundRobin { quantum },
        ]
    }
}
