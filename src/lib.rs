//! Single-CPU process scheduling simulator.
//!
//! Given a set of processes (arrival time, burst time, optional
//! priority), computes the execution timeline and per-process waiting
//! and turnaround times under one of four policies.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionSlice`, `Timeline`,
//!   `TimelineBuilder`
//! - **`scheduler`**: FCFS, SJF, priority and round-robin policies,
//!   `run_schedule`, `compare_policies`, and `ScheduleSummary` KPIs
//! - **`validation`**: Input integrity checks (duplicate pids, negative
//!   arrivals, empty bursts)
//! - **`request`**: Explicit, serde-readable request boundary
//! - **`workload`**: Seeded random process sets
//!
//! Rendering the timeline and presenting the statistics are left to the
//! caller; everything here is plain data.
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{run_schedule, Policy};
//!
//! let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
//! let policy = Policy::round_robin(2).unwrap();
//! let outcome = run_schedule(&policy, &processes).unwrap();
//!
//! let spans: Vec<_> = outcome
//!     .timeline
//!     .slices
//!     .iter()
//!     .map(|s| (s.pid, s.start, s.end))
//!     .collect();
//! assert_eq!(spans, vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7)]);
//!
//! let averages = outcome.averages().unwrap();
//! assert!((averages.waiting_time - 2.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod error;
pub mod models;
pub mod request;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
