//! Result reporting
//!
//! A run produces one `CaseReport` per generated sequence. Reports are
//! rendered either as text for the console or as a JSON document.

pub mod json;
pub mod text;

use crate::config::{Config, OutputFormat};
use crate::dataset::DatasetKind;
use crate::Result;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Result and timing of one reduction method on one case
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodResult {
    pub max: i64,
    #[serde(serialize_with = "json::serialize_duration")]
    pub duration: Duration,
}

/// Sequential and parallel outcome for one test case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    /// 1-based case number
    pub case: usize,
    pub kind: DatasetKind,
    pub size: usize,
    pub workers_requested: usize,
    /// Worker count after clamping to the list size
    pub workers_used: usize,
    pub sequential: MethodResult,
    pub parallel: MethodResult,
    /// `sequential / parallel` duration ratio
    pub speedup: Option<f64>,
}

impl CaseReport {
    /// Whether both methods agree on the maximum
    pub fn results_match(&self) -> bool {
        self.sequential.max == self.parallel.max
    }
}

/// Write reports to `out` in the configured format
pub fn write_report<W: Write>(out: &mut W, config: &Config, reports: &[CaseReport]) -> Result<()> {
    match config.output.format {
        OutputFormat::Text => text::write_report(out, reports)?,
        OutputFormat::Json => json::write_report(out, config, reports)?,
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_report(case: usize) -> CaseReport {
    CaseReport {
        case,
        kind: DatasetKind::Random,
        size: 1_000_000,
        workers_requested: 4,
        workers_used: 4,
        sequential: MethodResult {
            max: 100,
            duration: Duration::from_micros(2_000),
        },
        parallel: MethodResult {
            max: 100,
            duration: Duration::from_micros(500),
        },
        speedup: Some(4.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_match() {
        let mut report = sample_report(1);
        assert!(report.results_match());
        report.parallel.max = 99;
        assert!(!report.results_match());
    }

    #[test]
    fn test_write_report_dispatch() {
        let mut config = Config::new(1_000_000, 4);
        let reports = vec![sample_report(1)];

        let mut text = Vec::new();
        write_report(&mut text, &config, &reports).unwrap();
        assert!(String::from_utf8(text).unwrap().contains("Test Case 1:"));

        config.output.format = OutputFormat::Json;
        let mut json = Vec::new();
        write_report(&mut json, &config, &reports).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["cases"][0]["case"], 1);
    }
}
