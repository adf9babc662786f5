//! Report sinks.
//!
//! Rendering is decoupled from computation: disciplines and the
//! metrics calculator return plain values, and these sinks format
//! them onto any [`io::Write`]. The CSV layout is the contractual
//! output; the console block and timeline are best-effort views with
//! no format guarantees.

use std::io::{self, Write};

use crate::models::RunOutcome;
use crate::sim::RunMetrics;

/// Column header of the CSV report.
pub const CSV_HEADER: &str = "Algorithm,Job Throughput,CPU Utilization,\
Average Turnaround Time,Average Response Time,Average Waiting Time";

/// Writes the CSV report: header plus one row per run.
pub fn write_csv<W: Write>(out: &mut W, runs: &[RunMetrics]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for m in runs {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            m.policy, m.throughput, m.cpu_utilization, m.avg_turnaround, m.avg_response, m.avg_waiting
        )?;
    }
    Ok(())
}

/// Writes a human-readable block for one run: the five aggregates plus
/// a per-process table.
pub fn write_console<W: Write>(out: &mut W, metrics: &RunMetrics) -> io::Result<()> {
    writeln!(out, "{}:", metrics.policy)?;
    writeln!(out, "Job Throughput: {}", metrics.throughput)?;
    writeln!(out, "CPU Utilization: {}%", metrics.cpu_utilization)?;
    writeln!(out, "Average Turnaround Time: {}", metrics.avg_turnaround)?;
    writeln!(out, "Average Response Time: {}", metrics.avg_response)?;
    writeln!(out, "Average Waiting Time: {}", metrics.avg_waiting)?;

    writeln!(
        out,
        "  {:>4} {:>10} {:>10} {:>7} {:>8}",
        "pid", "completion", "turnaround", "waiting", "response"
    )?;
    for p in &metrics.per_process {
        writeln!(
            out,
            "  {:>4} {:>10} {:>10} {:>7} {:>8}",
            p.pid, p.completion, p.turnaround, p.waiting, p.response
        )?;
    }
    Ok(())
}

/// Writes a one-line Gantt-style view of a run's dispatch timeline,
/// with adjacent same-process grants merged.
pub fn write_timeline<W: Write>(out: &mut W, outcome: &RunOutcome) -> io::Result<()> {
    write!(out, "{}:", outcome.policy)?;
    for s in outcome.coalesced_slices() {
        write!(out, " [{}..{}) P{}", s.start, s.end, s.pid)?;
    }
    writeln!(out)
}
