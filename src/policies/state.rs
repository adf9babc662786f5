//! Per-run execution state.
//!
//! Owns the simulated clock, the mutable per-process bookkeeping, and
//! the dispatch log for a single policy run. Every run builds its own
//! `RunState` from the immutable process slice, so no timing field can
//! leak from one run into the next and no explicit reset step exists.

use crate::models::{Process, ProcessOutcome, RunOutcome, Slice};

/// Mutable bookkeeping for one process within one run.
///
/// `response` doubles as the started flag: it is `Some` exactly when
/// the process has received its first tick of CPU.
#[derive(Debug, Clone)]
struct ProcState {
    remaining: i64,
    response: Option<i64>,
    completion: Option<i64>,
}

/// Clock, ready-set scanning, and dispatch accounting for one run.
///
/// The selection contract shared by the scanning disciplines: the
/// ready set is every process that has arrived and still owes work;
/// selection takes the minimum of a policy key, with ties going to the
/// lowest input index.
#[derive(Debug)]
pub(crate) struct RunState<'a> {
    procs: &'a [Process],
    states: Vec<ProcState>,
    now: i64,
    slices: Vec<Slice>,
}

impl<'a> RunState<'a> {
    pub fn new(procs: &'a [Process]) -> Self {
        let states = procs
            .iter()
            .map(|p| ProcState {
                remaining: p.burst,
                response: None,
                completion: None,
            })
            .collect();
        Self {
            procs,
            states,
            now: 0,
            slices: Vec::new(),
        }
    }

    /// Current value of the simulated clock.
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Ticks still owed by the process at `idx`.
    pub fn remaining(&self, idx: usize) -> i64 {
        self.states[idx].remaining
    }

    /// Whether every process has finished.
    pub fn all_done(&self) -> bool {
        self.states.iter().all(|s| s.remaining == 0)
    }

    /// Advances the clock one tick with the CPU idle.
    pub fn idle_tick(&mut self) {
        self.now += 1;
    }

    /// Jumps the clock forward to `t`; never moves it backwards.
    pub fn jump_to(&mut self, t: i64) {
        self.now = self.now.max(t);
    }

    /// Scans the ready set and returns the index minimizing `key`.
    ///
    /// The key sees the process and its remaining work. Ties keep the
    /// first candidate encountered, i.e. the lowest input index.
    pub fn select_ready_min<K>(&self, key: K) -> Option<usize>
    where
        K: Fn(&Process, i64) -> i64,
    {
        let mut best: Option<(usize, i64)> = None;
        for (i, p) in self.procs.iter().enumerate() {
            if p.arrived_by(self.now) && self.states[i].remaining > 0 {
                let k = key(p, self.states[i].remaining);
                if best.map_or(true, |(_, bk)| k < bk) {
                    best = Some((i, k));
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Grants `ticks` of CPU to the process at `idx`, advancing the
    /// clock and logging the dispatch.
    ///
    /// Captures the response time on the first grant only and records
    /// the completion tick when the last owed tick executes.
    pub fn execute(&mut self, idx: usize, ticks: i64) {
        debug_assert!(ticks > 0 && ticks <= self.states[idx].remaining);
        let pid = self.procs[idx].pid;

        let state = &mut self.states[idx];
        if state.response.is_none() {
            state.response = Some(self.now - self.procs[idx].arrival);
        }
        state.remaining -= ticks;

        self.slices.push(Slice {
            pid,
            start: self.now,
            end: self.now + ticks,
        });
        self.now += ticks;

        if self.states[idx].remaining == 0 {
            self.states[idx].completion = Some(self.now);
        }
    }

    /// Grants the process at `idx` all of its remaining work at once.
    pub fn run_to_completion(&mut self, idx: usize) {
        let remaining = self.states[idx].remaining;
        self.execute(idx, remaining);
    }

    /// Finalizes the run under the given display label.
    ///
    /// Only finished processes yield records; the metrics calculator
    /// rejects outcomes with records missing.
    pub fn into_outcome(self, label: impl Into<String>) -> RunOutcome {
        let records = self
            .procs
            .iter()
            .zip(&self.states)
            .filter_map(|(p, s)| {
                Some(ProcessOutcome {
                    pid: p.pid,
                    completion: s.completion?,
                    response: s.response?,
                })
            })
            .collect();
        RunOutcome {
            policy: label.into(),
            slices: self.slices,
            records,
            elapsed: self.now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procs() -> Vec<Process> {
        vec![
            Process::new(1).with_arrival(0).with_burst(4),
            Process::new(2).with_arrival(2).with_burst(4),
        ]
    }

    #[test]
    fn test_ready_set_excludes_future_arrivals() {
        let set = procs();
        let state = RunState::new(&set);
        // At t=0 only the first process has arrived.
        assert_eq!(state.select_ready_min(|p, _| p.burst), Some(0));
    }

    #[test]
    fn test_tie_break_keeps_lowest_index() {
        let set = vec![
            Process::new(9).with_burst(3),
            Process::new(1).with_burst(3),
        ];
        let state = RunState::new(&set);
        // Equal keys: the first (lowest-index) candidate wins, pid aside.
        assert_eq!(state.select_ready_min(|p, _| p.burst), Some(0));
    }

    #[test]
    fn test_idle_and_jump() {
        let set = procs();
        let mut state = RunState::new(&set);
        state.idle_tick();
        assert_eq!(state.now(), 1);
        state.jump_to(5);
        assert_eq!(state.now(), 5);
        state.jump_to(3); // never backwards
        assert_eq!(state.now(), 5);
    }

    #[test]
    fn test_response_captured_once() {
        let set = procs();
        let mut state = RunState::new(&set);
        state.jump_to(3);
        state.execute(0, 1); // first grant at t=3 → response 3
        state.jump_to(10);
        state.execute(0, 3); // later grant must not touch response
        let out = state.into_outcome("test");
        assert_eq!(out.response_of(1), Some(3));
    }

    #[test]
    fn test_completion_recorded_at_last_tick() {
        let set = procs();
        let mut state = RunState::new(&set);
        state.execute(0, 4);
        assert_eq!(state.remaining(0), 0);
        state.jump_to(4);
        state.run_to_completion(1);
        assert!(state.all_done());
        let out = state.into_outcome("test");
        assert_eq!(out.completion_of(1), Some(4));
        assert_eq!(out.completion_of(2), Some(8));
        assert_eq!(out.elapsed, 8);
    }

    #[test]
    fn test_unfinished_processes_yield_no_record() {
        let set = procs();
        let mut state = RunState::new(&set);
        state.execute(0, 4);
        let out = state.into_outcome("test");
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.completion_of(2), None);
    }
}
