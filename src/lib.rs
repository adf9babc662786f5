//! Discrete-tick CPU scheduling simulator.
//!
//! Simulates the classic single-core dispatching disciplines over a
//! fixed process set and derives per-process and aggregate timing
//! metrics from each run. Runs are sequential, deterministic, and
//! independent: every discipline works from the same immutable inputs
//! and keeps its bookkeeping in run-local state.
//!
//! # Modules
//!
//! - **`models`**: domain types — [`Process`](models::Process),
//!   [`RunOutcome`](models::RunOutcome), [`Slice`](models::Slice)
//! - **`policies`**: the disciplines — FCFS, SJF, SRTF, Round-Robin,
//!   static Priority
//! - **`sim`**: run orchestration and the metrics calculator
//! - **`validation`**: input integrity checks
//! - **`report`**: CSV and console rendering of finished runs
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::policies::Fcfs;
//! use cpu_sched::sim::Simulation;
//!
//! let sim = Simulation::new(vec![
//!     Process::new(1).with_burst(8),
//!     Process::new(2).with_arrival(1).with_burst(4),
//! ])?;
//! let metrics = sim.run(&Fcfs)?;
//! assert_eq!(metrics.per_process[0].completion, 8);
//! assert_eq!(metrics.per_process[1].waiting, 7);
//! # Ok::<(), cpu_sched::SimError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policies;
pub mod report;
pub mod sim;
pub mod validation;

pub use error::SimError;
