//! Run performance metrics.
//!
//! Derives per-process and aggregate indicators from a completed
//! policy run and its input process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Job Throughput | n / total elapsed ticks |
//! | CPU Utilization | constant 100% (modeled, see below) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first execution - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//!
//! Utilization is reported as a constant rather than a measured
//! busy/idle ratio: the simulation ends at the last completion, and
//! idle ticks inside the run are not charged against the CPU.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::models::{Process, RunOutcome};

/// Derived timing for one process in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: u32,
    /// Tick at which the process finished.
    pub completion: i64,
    /// Total time from arrival to completion.
    pub turnaround: i64,
    /// Time spent ready but not executing.
    pub waiting: i64,
    /// Delay between arrival and first execution.
    pub response: i64,
}

/// Aggregate performance indicators for one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Display label of the discipline.
    pub policy: String,
    /// Jobs finished per elapsed tick.
    pub throughput: f64,
    /// CPU utilization as a percentage value.
    pub cpu_utilization: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Per-process rows, in input order.
    pub per_process: Vec<ProcessMetrics>,
}

impl RunMetrics {
    /// Computes metrics from a finished run and its input processes.
    ///
    /// Per process: `turnaround = completion - arrival` and
    /// `waiting = turnaround - burst`. A negative waiting time means
    /// the outcome violates the timing invariants of every discipline
    /// and is surfaced as [`SimError::NegativeWaiting`], never clamped.
    ///
    /// # Errors
    /// - [`SimError::EmptyProcessSet`] for an empty input
    /// - [`SimError::ZeroElapsedTime`] when the run consumed no ticks
    /// - [`SimError::MissingOutcome`] when a process has no record
    /// - [`SimError::NegativeWaiting`] on an invariant violation
    pub fn calculate(outcome: &RunOutcome, processes: &[Process]) -> Result<Self, SimError> {
        if processes.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }
        if outcome.elapsed <= 0 {
            return Err(SimError::ZeroElapsedTime);
        }

        let mut per_process = Vec::with_capacity(processes.len());
        let mut total_turnaround = 0.0;
        let mut total_waiting = 0.0;
        let mut total_response = 0.0;

        for p in processes {
            let completion = outcome
                .completion_of(p.pid)
                .ok_or(SimError::MissingOutcome { pid: p.pid })?;
            let response = outcome
                .response_of(p.pid)
                .ok_or(SimError::MissingOutcome { pid: p.pid })?;

            let turnaround = completion - p.arrival;
            let waiting = turnaround - p.burst;
            if waiting < 0 {
                return Err(SimError::NegativeWaiting { pid: p.pid, waiting });
            }

            total_turnaround += turnaround as f64;
            total_waiting += waiting as f64;
            total_response += response as f64;
            per_process.push(ProcessMetrics {
                pid: p.pid,
                completion,
                turnaround,
                waiting,
                response,
            });
        }

        let n = processes.len() as f64;
        Ok(Self {
            policy: outcome.policy.clone(),
            throughput: n / outcome.elapsed as f64,
            cpu_utilization: 100.0,
            avg_turnaround: total_turnaround / n,
            avg_response: total_response / n,
            avg_waiting: total_waiting / n,
            per_process,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessOutcome, Slice};

    fn make_process(pid: u32, arrival: i64, burst: i64) -> Process {
        Process::new(pid).with_arrival(arrival).with_burst(burst)
    }

    fn make_outcome(records: Vec<ProcessOutcome>, elapsed: i64) -> RunOutcome {
        RunOutcome {
            policy: "FCFS".into(),
            slices: Vec::new(),
            records,
            elapsed,
        }
    }

    #[test]
    fn test_metrics_basic() {
        // Two back-to-back jobs: 0..3 and 3..8.
        let processes = vec![make_process(1, 0, 3), make_process(2, 0, 5)];
        let outcome = make_outcome(
            vec![
                ProcessOutcome { pid: 1, completion: 3, response: 0 },
                ProcessOutcome { pid: 2, completion: 8, response: 3 },
            ],
            8,
        );

        let m = RunMetrics::calculate(&outcome, &processes).unwrap();
        assert!((m.throughput - 0.25).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert!((m.avg_turnaround - 5.5).abs() < 1e-10); // (3 + 8) / 2
        assert!((m.avg_waiting - 1.5).abs() < 1e-10); // (0 + 3) / 2
        assert!((m.avg_response - 1.5).abs() < 1e-10);
        assert_eq!(m.per_process[1].turnaround, 8);
        assert_eq!(m.per_process[1].waiting, 3);
    }

    #[test]
    fn test_conservation_per_process() {
        let processes = vec![make_process(1, 2, 4)];
        let outcome = make_outcome(
            vec![ProcessOutcome { pid: 1, completion: 9, response: 1 }],
            9,
        );
        let m = RunMetrics::calculate(&outcome, &processes).unwrap();
        let row = &m.per_process[0];
        assert_eq!(row.turnaround, row.waiting + 4);
        assert_eq!(row.completion, 2 + row.waiting + 4);
    }

    #[test]
    fn test_empty_set_fails_fast() {
        let outcome = make_outcome(Vec::new(), 5);
        assert!(matches!(
            RunMetrics::calculate(&outcome, &[]),
            Err(SimError::EmptyProcessSet)
        ));
    }

    #[test]
    fn test_zero_elapsed_fails_fast() {
        let processes = vec![make_process(1, 0, 3)];
        let outcome = make_outcome(Vec::new(), 0);
        assert!(matches!(
            RunMetrics::calculate(&outcome, &processes),
            Err(SimError::ZeroElapsedTime)
        ));
    }

    #[test]
    fn test_missing_record_detected() {
        let processes = vec![make_process(1, 0, 3), make_process(2, 0, 3)];
        let outcome = make_outcome(
            vec![ProcessOutcome { pid: 1, completion: 3, response: 0 }],
            6,
        );
        assert!(matches!(
            RunMetrics::calculate(&outcome, &processes),
            Err(SimError::MissingOutcome { pid: 2 })
        ));
    }

    #[test]
    fn test_negative_waiting_surfaced_not_clamped() {
        // completion < arrival + burst cannot come out of a correct
        // schedule; the calculator must refuse it.
        let processes = vec![make_process(1, 0, 5)];
        let outcome = make_outcome(
            vec![ProcessOutcome { pid: 1, completion: 3, response: 0 }],
            3,
        );
        assert!(matches!(
            RunMetrics::calculate(&outcome, &processes),
            Err(SimError::NegativeWaiting { pid: 1, waiting: -2 })
        ));
    }

    #[test]
    fn test_metrics_ignore_slices() {
        // Slices feed the timeline view; aggregates come from records.
        let processes = vec![make_process(1, 0, 3)];
        let mut outcome = make_outcome(
            vec![ProcessOutcome { pid: 1, completion: 3, response: 0 }],
            3,
        );
        outcome.slices.push(Slice { pid: 1, start: 0, end: 3 });
        let m = RunMetrics::calculate(&outcome, &processes).unwrap();
        assert!((m.throughput - (1.0 / 3.0)).abs() < 1e-10);
    }
}
