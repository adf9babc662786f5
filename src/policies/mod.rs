//! Scheduling disciplines.
//!
//! Each discipline is a stateless transformation from an immutable
//! process set to a [`RunOutcome`](crate::models::RunOutcome): it
//! advances a private simulated clock, grants CPU slices, and records
//! per-process response and completion times. Disciplines never call
//! each other and never mutate their input.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::policies::{Policy, RoundRobin};
//!
//! let set = vec![Process::new(1).with_burst(5)];
//! let outcome = RoundRobin::new(3).run(&set);
//! assert_eq!(outcome.completion_of(1), Some(5));
//! ```
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod disciplines;
mod state;

pub use disciplines::{Fcfs, RoundRobin, Sjf, Srtf, StaticPriority, DEFAULT_QUANTUM};
pub(crate) use state::RunState;

use std::fmt::Debug;

use crate::models::{Process, RunOutcome};

/// A scheduling discipline.
///
/// Implementations own nothing but their configuration (e.g. the
/// Round-Robin quantum); all per-run state is created inside [`run`]
/// and discarded with the returned outcome, so repeated runs over the
/// same slice are identical.
///
/// [`run`]: Policy::run
pub trait Policy: Send + Sync + Debug {
    /// Short discipline name (e.g. "FCFS").
    fn name(&self) -> &'static str;

    /// Display label used in reports. Defaults to [`name`](Policy::name);
    /// parameterized disciplines interpolate their configuration.
    fn label(&self) -> String {
        self.name().to_string()
    }

    /// Runs the discipline over the process set.
    fn run(&self, processes: &[Process]) -> RunOutcome;

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The five standard disciplines, in report order.
///
/// `quantum` configures the Round-Robin member and must be positive.
pub fn standard_disciplines(quantum: i64) -> Vec<Box<dyn Policy>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Srtf),
        Box::new(RoundRobin::new(quantum)),
        Box::new(StaticPriority),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_discipline_order() {
        let labels: Vec<String> = standard_disciplines(3).iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["FCFS", "SJF", "SRTF", "RR (Q=3)", "Priority"]);
    }

    #[test]
    fn test_default_label_is_name() {
        assert_eq!(Fcfs.label(), Fcfs.name());
        assert_ne!(RoundRobin::new(4).label(), RoundRobin::new(4).name());
    }
}
