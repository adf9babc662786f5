//! Sequential run orchestration.
//!
//! A [`Simulation`] owns a validated process set and runs disciplines
//! against it one at a time. Policies receive the set as an immutable
//! slice and keep all bookkeeping in run-local state, so consecutive
//! runs are independent: no reset step exists because there is nothing
//! to reset.

use log::info;

use crate::error::SimError;
use crate::models::{Process, RunOutcome};
use crate::policies::{self, Policy, DEFAULT_QUANTUM};
use crate::sim::RunMetrics;
use crate::validation::validate_processes;

/// A validated workload plus run configuration.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::sim::Simulation;
///
/// let sim = Simulation::new(vec![
///     Process::new(1).with_burst(8),
///     Process::new(2).with_arrival(1).with_burst(4),
/// ])?;
/// let runs = sim.run_all()?;
/// assert_eq!(runs.len(), 5);
/// assert_eq!(runs[0].policy, "FCFS");
/// # Ok::<(), cpu_sched::SimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: Vec<Process>,
    quantum: i64,
}

impl Simulation {
    /// Creates a simulation over the given process set.
    ///
    /// The set is validated once here; disciplines assume the
    /// preconditions hold from then on.
    ///
    /// # Errors
    /// [`SimError::InvalidInput`] carrying every detected issue.
    pub fn new(processes: Vec<Process>) -> Result<Self, SimError> {
        validate_processes(&processes).map_err(SimError::InvalidInput)?;
        Ok(Self {
            processes,
            quantum: DEFAULT_QUANTUM,
        })
    }

    /// Sets the Round-Robin quantum (default 3 ticks).
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] when `quantum` is not positive.
    pub fn with_quantum(mut self, quantum: i64) -> Result<Self, SimError> {
        if quantum <= 0 {
            return Err(SimError::InvalidQuantum(quantum));
        }
        self.quantum = quantum;
        Ok(self)
    }

    /// The validated process set.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The configured Round-Robin quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Runs one discipline and derives its metrics.
    pub fn run(&self, policy: &dyn Policy) -> Result<RunMetrics, SimError> {
        self.run_with_outcome(policy).map(|(_, metrics)| metrics)
    }

    /// Runs one discipline, returning the raw outcome alongside the
    /// metrics. The outcome carries the dispatch timeline for display.
    pub fn run_with_outcome(
        &self,
        policy: &dyn Policy,
    ) -> Result<(RunOutcome, RunMetrics), SimError> {
        info!(
            "running {} over {} processes",
            policy.label(),
            self.processes.len()
        );
        let outcome = policy.run(&self.processes);
        let metrics = RunMetrics::calculate(&outcome, &self.processes)?;
        Ok((outcome, metrics))
    }

    /// Runs the five standard disciplines in report order: FCFS, SJF,
    /// SRTF, Round-Robin, Priority.
    pub fn run_all(&self) -> Result<Vec<RunMetrics>, SimError> {
        policies::standard_disciplines(self.quantum)
            .iter()
            .map(|p| self.run(p.as_ref()))
            .collect()
    }
}
