//! Built-in scheduling disciplines.
//!
//! # Categories
//!
//! - **Non-preemptive**: FCFS, SJF, static Priority
//! - **Preemptive**: SRTF
//! - **Time-sliced**: Round-Robin
//!
//! # Selection Convention
//! Scanning disciplines take the ready process minimizing the policy
//! key; ties go to the lowest input index.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

use std::collections::VecDeque;

use log::debug;

use super::{Policy, RunState};
use crate::models::{Process, RunOutcome};

/// Default Round-Robin quantum in ticks.
pub const DEFAULT_QUANTUM: i64 = 3;

// ======================== Non-preemptive ========================

/// First-Come-First-Served.
///
/// Runs processes to completion in arrival order; simultaneous
/// arrivals keep input order. The clock jumps over any gap before the
/// next arrival, so no ready-set scan is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> RunOutcome {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival); // stable on ties

        let mut state = RunState::new(processes);
        for idx in order {
            state.jump_to(processes[idx].arrival);
            state.run_to_completion(idx);
        }
        state.into_outcome(self.label())
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest-Job-First, non-preemptive.
///
/// At each decision point picks the ready process with the smallest
/// total burst and runs it to completion. Minimizes mean waiting time
/// among non-preemptive disciplines (Smith, 1956); long jobs can
/// starve under a steady supply of short ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Policy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> RunOutcome {
        let mut state = RunState::new(processes);
        while !state.all_done() {
            match state.select_ready_min(|p, _| p.burst) {
                Some(idx) => state.run_to_completion(idx),
                None => state.idle_tick(),
            }
        }
        state.into_outcome(self.label())
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First"
    }
}

/// Static priority, non-preemptive.
///
/// At each decision point picks the ready process with the numerically
/// lowest priority value and runs it to completion. No aging, and no
/// preemption when a more urgent process arrives mid-burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPriority;

impl Policy for StaticPriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn run(&self, processes: &[Process]) -> RunOutcome {
        let mut state = RunState::new(processes);
        while !state.all_done() {
            match state.select_ready_min(|p, _| i64::from(p.priority)) {
                Some(idx) => state.run_to_completion(idx),
                None => state.idle_tick(),
            }
        }
        state.into_outcome(self.label())
    }

    fn description(&self) -> &'static str {
        "Static priority, non-preemptive"
    }
}

// ========================= Preemptive ==========================

/// Shortest-Remaining-Time-First.
///
/// The preemptive variant of SJF: every tick re-selects the ready
/// process with the least work left, so a newly arrived short job
/// preempts a long one mid-burst. A process may be preempted and
/// resumed any number of times; its response time is still captured
/// only at its first tick of execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, processes: &[Process]) -> RunOutcome {
        let mut state = RunState::new(processes);
        while !state.all_done() {
            match state.select_ready_min(|_, remaining| remaining) {
                Some(idx) => state.execute(idx, 1),
                None => state.idle_tick(),
            }
        }
        state.into_outcome(self.label())
    }

    fn description(&self) -> &'static str {
        "Shortest-Remaining-Time-First"
    }
}

// ========================= Time-sliced =========================

/// Round-Robin with a fixed quantum.
///
/// Keeps a FIFO queue of process indices. The first process seeds the
/// queue; every other process is admitted by the arrival scan that
/// follows each slice, in ascending index order. A preempted process
/// rejoins the tail behind the processes that arrived during its
/// slice. Two admission rules cover workloads the seed-and-scan cycle
/// alone would miss: a dequeued process that has not yet arrived first
/// drags the clock to its arrival, and a drained queue re-admits the
/// earliest-arriving unfinished process.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin discipline with the given quantum.
    ///
    /// # Panics
    /// Panics if `quantum` is not positive.
    /// [`Simulation`](crate::sim::Simulation) validates its quantum
    /// before constructing the discipline.
    pub fn new(quantum: i64) -> Self {
        assert!(quantum > 0, "round-robin quantum must be positive");
        Self { quantum }
    }

    /// The configured quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn label(&self) -> String {
        format!("RR (Q={})", self.quantum)
    }

    fn run(&self, processes: &[Process]) -> RunOutcome {
        let n = processes.len();
        let mut state = RunState::new(processes);
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut admitted = vec![false; n];

        if n > 0 {
            queue.push_back(0);
            admitted[0] = true;
        }

        while let Some(idx) = queue.pop_front() {
            state.jump_to(processes[idx].arrival);
            let grant = state.remaining(idx).min(self.quantum);
            state.execute(idx, grant);

            // Admit everything that arrived by the end of the slice,
            // in ascending index order.
            for i in 0..n {
                if !admitted[i] && processes[i].arrived_by(state.now()) && state.remaining(i) > 0 {
                    debug!("RR: admitting pid {} at t={}", processes[i].pid, state.now());
                    queue.push_back(i);
                    admitted[i] = true;
                }
            }

            if state.remaining(idx) > 0 {
                queue.push_back(idx);
            }

            // Arrival gap: the queue drained but unadmitted work
            // remains. Admit the earliest arrival so the run finishes.
            if queue.is_empty() {
                let next = (0..n)
                    .filter(|&i| !admitted[i] && state.remaining(i) > 0)
                    .min_by_key(|&i| (processes[i].arrival, i));
                if let Some(i) = next {
                    debug!("RR: queue drained, admitting pid {}", processes[i].pid);
                    queue.push_back(i);
                    admitted[i] = true;
                }
            }
        }
        state.into_outcome(self.label())
    }

    fn description(&self) -> &'static str {
        "Round-Robin, fixed quantum"
    }
}
