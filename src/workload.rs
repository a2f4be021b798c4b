//! Random workload generation.
//!
//! Produces valid process sets for experiments and tests. Pids run
//! `1..=count` in generation order.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::{Pid, Process};

/// Generator for random process sets.
///
/// # Example
///
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5)
///     .with_burst_range(2, 4)
///     .generate_seeded(42);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (2..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival: (i64, i64),
    burst: (i64, i64),
    priority: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with arrivals in
    /// `0..=20`, bursts in `1..=10` and priority 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 20),
            burst: (1, 10),
            priority: (0, 0),
        }
    }

    /// Sets the arrival time range. Negative bounds are raised to 0.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival = ordered(min.max(0), max.max(0));
        self
    }

    /// Sets the burst time range. Bounds below 1 are raised to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = ordered(min.max(1), max.max(1));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.priority = ordered(min, max);
        self
    }

    /// Generates a process set from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|n| {
                Process::new(
                    n as Pid,
                    rng.random_range(self.arrival.0..=self.arrival.1),
                    rng.random_range(self.burst.0..=self.burst.1),
                )
                .with_priority(rng.random_range(self.priority.0..=self.priority.1))
            })
            .collect()
    }

    /// Generates a reproducible process set from a seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
