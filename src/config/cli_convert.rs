//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::OutputFormat;
use anyhow::{Context, Result};

/// Parse an element count (e.g., "1000", "500k", "10m", "1g")
///
/// Suffixes are decimal: `k` = 1,000, `m` = 1,000,000, `g` = 1,000,000,000.
pub fn parse_count(s: &str) -> Result<usize> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('k') {
        (n, 1_000usize)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 1_000_000)
    } else if let Some(n) = s.strip_suffix('g') {
        (n, 1_000_000_000)
    } else {
        (s.as_str(), 1)
    };

    let num: usize = num_str
        .parse()
        .with_context(|| format!("Invalid size format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Size out of range: {}", s))
}

/// Convert CLI FormatArg to config OutputFormat
pub fn convert_format(arg: cli::FormatArg) -> OutputFormat {
    match arg {
        cli::FormatArg::Text => OutputFormat::Text,
        cli::FormatArg::Json => OutputFormat::Json,
    }
}
