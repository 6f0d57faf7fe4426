//! Human-readable text output

use super::CaseReport;
use crate::util::time::{calculate_rate, format_duration, format_rate};
use std::io::{self, Write};

/// Write one block per test case
///
/// For each case: list size, regular (sequential) max and time, parallel
/// max and time, and the speed improvement when it can be computed.
pub fn write_report<W: Write>(out: &mut W, reports: &[CaseReport]) -> io::Result<()> {
    for report in reports {
        writeln!(out)?;
        writeln!(out, "Test Case {} ({}):", report.case, report.kind)?;
        writeln!(out, "List size: {}", format_number(report.size as u64))?;

        writeln!(out, "Regular max: {}", report.sequential.max)?;
        writeln!(
            out,
            "Regular time: {} ({} elem/s)",
            format_duration(report.sequential.duration),
            format_rate(calculate_rate(report.size, report.sequential.duration))
        )?;

        writeln!(out, "Parallel max: {}", report.parallel.max)?;
        writeln!(
            out,
            "Parallel time: {} ({} elem/s, {} workers)",
            format_duration(report.parallel.duration),
            format_rate(calculate_rate(report.size, report.parallel.duration)),
            report.workers_used
        )?;
        if report.workers_used != report.workers_requested {
            writeln!(
                out,
                "Note: {} workers requested, clamped to list size",
                report.workers_requested
            )?;
        }

        if let Some(speedup) = report.speedup {
            writeln!(out, "Speed improvement: {:.2}x", speedup)?;
        }
    }

    Ok(())
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
