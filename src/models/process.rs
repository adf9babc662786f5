//! Process model.
//!
//! A process is the unit of scheduling: a single CPU burst with an
//! arrival time and a static priority.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Carries only the immutable inputs of a simulation. Per-run
/// bookkeeping (remaining work, response and completion times) lives
/// inside a policy run, so one process value can feed any number of
/// runs unchanged.
///
/// # Time Representation
/// All times are integer ticks relative to simulation start (t=0).
/// A tick is the smallest schedulable unit of CPU time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: u32,
    /// Tick at which the process becomes eligible to run. Must be `>= 0`.
    pub arrival: i64,
    /// Total CPU ticks required to finish. Must be `> 0`.
    pub burst: i64,
    /// Static priority; a numerically lower value means higher priority.
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with zero burst and neutral
    /// priority. A zero burst fails validation, so callers follow with
    /// [`with_burst`](Self::with_burst).
    pub fn new(pid: u32) -> Self {
        Self {
            pid,
            arrival: 0,
            burst: 0,
            priority: 0,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the total CPU burst in ticks.
    pub fn with_burst(mut self, burst: i64) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the static priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process is eligible to run at `now`.
    pub fn arrived_by(&self, now: i64) -> bool {
        self.arrival <= now
    }
}
