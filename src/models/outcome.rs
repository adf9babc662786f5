//! Run outcome (solution) model.
//!
//! A completed policy run produces an execution timeline and the
//! observed per-process event times. Derived metrics (turnaround,
//! waiting, averages) are computed separately by
//! [`RunMetrics`](crate::sim::RunMetrics).

use serde::{Deserialize, Serialize};

/// One dispatch grant: a contiguous stretch of CPU given to a process.
///
/// Slices record grants as issued, so a preemptive discipline may emit
/// several adjacent slices for the same process. Use
/// [`RunOutcome::coalesced_slices`] for a display-friendly merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that occupied the CPU.
    pub pid: u32,
    /// First tick of the grant (inclusive).
    pub start: i64,
    /// End of the grant (exclusive).
    pub end: i64,
}

impl Slice {
    /// Grant length in ticks.
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the grant covers no ticks.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Observed event times for one process in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub pid: u32,
    /// Tick at which the process executed its last owed tick.
    pub completion: i64,
    /// Delay between arrival and the first tick of execution.
    pub response: i64,
}

/// The result of running one discipline over a process set.
///
/// Records are in process input order. Every process of a finished run
/// has a record; a missing record means the run was cut short and is
/// rejected by the metrics calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Display label of the discipline that produced this run.
    pub policy: String,
    /// Dispatch grants in chronological order.
    pub slices: Vec<Slice>,
    /// Per-process event times, in input order.
    pub records: Vec<ProcessOutcome>,
    /// Final value of the simulated clock.
    pub elapsed: i64,
}

impl RunOutcome {
    /// Completion tick of the given process, if it finished.
    pub fn completion_of(&self, pid: u32) -> Option<i64> {
        self.records.iter().find(|r| r.pid == pid).map(|r| r.completion)
    }

    /// Response time of the given process, if it ever ran.
    pub fn response_of(&self, pid: u32) -> Option<i64> {
        self.records.iter().find(|r| r.pid == pid).map(|r| r.response)
    }

    /// Total CPU-busy ticks across the run.
    ///
    /// For a finished run this equals the sum of all process bursts;
    /// the rest of `elapsed` is idle time.
    pub fn busy_ticks(&self) -> i64 {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Slices granted to one process, in chronological order.
    pub fn slices_of(&self, pid: u32) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(move |s| s.pid == pid)
    }

    /// The timeline with adjacent same-process grants merged.
    pub fn coalesced_slices(&self) -> Vec<Slice> {
        let mut merged: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match merged.last_mut() {
                Some(last) if last.pid == slice.pid && last.end == slice.start => {
                    last.end = slice.end;
                }
                _ => merged.push(slice.clone()),
            }
        }
        merged
    }
}
