//! JSON output formatting

use super::CaseReport;
use crate::config::Config;
use crate::util::time::format_duration;
use crate::Result;
use anyhow::Context;
use serde::{Serialize, Serializer};
use std::io::Write;
use std::time::Duration;

/// Duration with both nanoseconds and human-readable format
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuration {
    pub nanos: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            nanos: u64::try_from(d.as_nanos()).unwrap_or(u64::MAX),
            human: format_duration(d),
        }
    }
}

/// Serialize a `Duration` field as a `JsonDuration` object
pub fn serialize_duration<S: Serializer>(
    d: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    JsonDuration::from_duration(*d).serialize(serializer)
}

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub config: &'a Config,
    pub cases: &'a [CaseReport],
}

/// Build the JSON document for a run
pub fn render_report(config: &Config, reports: &[CaseReport]) -> Result<String> {
    let doc = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        config,
        cases: reports,
    };
    serde_json::to_string_pretty(&doc).context("Failed to serialize report")
}

/// Write the JSON document followed by a newline
pub fn write_report<W: Write>(out: &mut W, config: &Config, reports: &[CaseReport]) -> Result<()> {
    let doc = render_report(config, reports)?;
    writeln!(out, "{}", doc).context("Failed to write JSON report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_report;

    #[test]
    fn test_json_duration() {
        let d = JsonDuration::from_duration(Duration::from_micros(1500));
        assert_eq!(d.nanos, 1_500_000);
        assert_eq!(d.human, "1.50ms");
    }

    #[test]
    fn test_json_duration_saturates() {
        let d = JsonDuration::from_duration(Duration::MAX);
        assert_eq!(d.nanos, u64::MAX);
    }

    #[test]
    fn test_render_report_structure() {
        let config = Config::new(1_000_000, 4);
        let doc = render_report(&config, &[sample_report(1), sample_report(2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();

        assert_eq!(value["config"]["size"], 1_000_000);
        assert_eq!(value["config"]["workers"], 4);
        assert_eq!(value["cases"].as_array().unwrap().len(), 2);

        let case = &value["cases"][0];
        assert_eq!(case["kind"], "random");
        assert_eq!(case["sequential"]["max"], 100);
        assert_eq!(case["parallel"]["duration"]["nanos"], 500_000);
        assert_eq!(case["speedup"], 4.0);
    }
}
