//! Simulation error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by simulation construction, runs, and reporting.
///
/// The simulation is a closed, deterministic computation, so the
/// runtime variants are precondition and invariant guards: they fire
/// on malformed input or on a scheduling defect, never on the
/// reference workload.
#[derive(Error, Debug)]
pub enum SimError {
    /// The process set failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The Round-Robin quantum is zero or negative.
    #[error("round-robin quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// Metrics were requested for an empty process set.
    #[error("cannot compute metrics for an empty process set")]
    EmptyProcessSet,

    /// Metrics were requested for a run with no elapsed time.
    #[error("cannot compute throughput over zero elapsed time")]
    ZeroElapsedTime,

    /// A run outcome lacks the record for a process.
    #[error("run outcome has no record for process {pid}")]
    MissingOutcome {
        /// Process whose record is absent.
        pid: u32,
    },

    /// A process would have negative waiting time, which indicates a
    /// scheduling defect rather than a property of the input.
    #[error("process {pid} has negative waiting time {waiting}")]
    NegativeWaiting {
        /// Offending process.
        pid: u32,
        /// The computed (negative) waiting time.
        waiting: i64,
    },

    /// Failure writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_invalid_input_display_joins_messages() {
        let errors = validate_processes(&[]).unwrap_err();
        let err = SimError::InvalidInput(errors);
        assert_eq!(err.to_string(), "invalid process set: process set is empty");
    }

    #[test]
    fn test_negative_waiting_display() {
        let err = SimError::NegativeWaiting { pid: 3, waiting: -2 };
        assert_eq!(err.to_string(), "process 3 has negative waiting time -2");
    }
}
