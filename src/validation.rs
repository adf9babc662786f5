//! Input validation for process sets.
//!
//! Checks structural integrity of a workload before any discipline
//! runs. Detects:
//! - Empty process sets
//! - Duplicate pids
//! - Non-positive bursts
//! - Negative arrival times
//!
//! The simulation core assumes these preconditions hold; everything
//! here fails before the first tick, never mid-run.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process set contains no processes.
    EmptySet,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process has a zero or negative CPU burst.
    NonPositiveBurst,
    /// A process arrives before simulation start.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set before simulation.
///
/// Checks:
/// 1. The set is non-empty
/// 2. No duplicate pids
/// 3. Every burst is positive
/// 4. Every arrival is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySet,
            "process set is empty",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.pid, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.pid, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_set() {
        let set = vec![
            Process::new(1).with_burst(8),
            Process::new(2).with_arrival(1).with_burst(4),
        ];
        assert!(validate_processes(&set).is_ok());
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(kinds(validate_processes(&[])), vec![ValidationErrorKind::EmptySet]);
    }

    #[test]
    fn test_duplicate_pid() {
        let set = vec![
            Process::new(1).with_burst(3),
            Process::new(1).with_burst(5),
        ];
        assert_eq!(
            kinds(validate_processes(&set)),
            vec![ValidationErrorKind::DuplicatePid]
        );
    }

    #[test]
    fn test_zero_burst_rejected() {
        let set = vec![Process::new(1)];
        assert_eq!(
            kinds(validate_processes(&set)),
            vec![ValidationErrorKind::NonPositiveBurst]
        );
    }

    #[test]
    fn test_negative_arrival_rejected() {
        let set = vec![Process::new(1).with_arrival(-2).with_burst(3)];
        assert_eq!(
            kinds(validate_processes(&set)),
            vec![ValidationErrorKind::NegativeArrival]
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let set = vec![
            Process::new(1).with_burst(-1),
            Process::new(1).with_arrival(-5).with_burst(2),
        ];
        let ks = kinds(validate_processes(&set));
        assert!(ks.contains(&ValidationErrorKind::DuplicatePid));
        assert!(ks.contains(&ValidationErrorKind::NonPositiveBurst));
        assert!(ks.contains(&ValidationErrorKind::NegativeArrival));
        assert_eq!(ks.len(), 3);
    }
}
