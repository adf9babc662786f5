//! Demo binary: runs the five standard disciplines over the reference
//! workload, prints each run, and saves the CSV report.

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use cpu_sched::models::Process;
use cpu_sched::policies::standard_disciplines;
use cpu_sched::report;
use cpu_sched::sim::Simulation;
use cpu_sched::SimError;

const CSV_PATH: &str = "cpu_metrics.csv";

/// The reference workload from the lab handout.
fn reference_set() -> Vec<Process> {
    vec![
        Process::new(1).with_arrival(0).with_burst(8).with_priority(2),
        Process::new(2).with_arrival(1).with_burst(4).with_priority(1),
        Process::new(3).with_arrival(2).with_burst(9).with_priority(3),
        Process::new(4).with_arrival(3).with_burst(5).with_priority(2),
    ]
}

fn run() -> Result<(), SimError> {
    let sim = Simulation::new(reference_set())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut runs = Vec::new();
    for policy in standard_disciplines(sim.quantum()) {
        let (outcome, metrics) = sim.run_with_outcome(policy.as_ref())?;
        report::write_console(&mut out, &metrics)?;
        report::write_timeline(&mut out, &outcome)?;
        writeln!(out)?;
        runs.push(metrics);
    }

    let mut csv = File::create(CSV_PATH)?;
    report::write_csv(&mut csv, &runs)?;
    writeln!(out, "Results saved to {CSV_PATH}.")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
