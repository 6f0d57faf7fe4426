//! Configuration module
//!
//! Handles CLI argument parsing, optional TOML configuration files, and
//! validation. Explicit CLI values always win over file values, which win
//! over built-in defaults.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of elements in each generated sequence
    pub size: usize,
    /// Requested worker threads for the parallel reduction
    pub workers: usize,
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Repetitions per case; the fastest run of each method is reported
    #[serde(default = "default_runs")]
    pub runs: usize,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Inclusive lower bound of random values
    #[serde(default = "default_min")]
    pub min: i64,
    /// Inclusive upper bound of random values
    #[serde(default = "default_max")]
    pub max: i64,
    /// Value of every element in the constant case
    #[serde(default = "default_fill")]
    pub fill: i64,
    /// Fixed PRNG seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_runs() -> usize {
    1
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    100
}

fn default_fill() -> i64 {
    1
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            fill: default_fill(),
            seed: None,
        }
    }
}

impl Config {
    /// Configuration with default dataset and output settings
    pub fn new(size: usize, workers: usize) -> Self {
        Self {
            size,
            workers,
            dataset: DatasetConfig::default(),
            runs: default_runs(),
            output: OutputConfig::default(),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  List size:    {}", self.size)?;
        writeln!(f, "  Workers:      {}", self.workers)?;
        writeln!(f, "  Random range: [{}, {}]", self.dataset.min, self.dataset.max)?;
        writeln!(f, "  Fill value:   {}", self.dataset.fill)?;
        match self.dataset.seed {
            Some(seed) => writeln!(f, "  Seed:         {}", seed)?,
            None => writeln!(f, "  Seed:         (entropy)")?,
        }
        write!(f, "  Runs:         {}", self.runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_defaults() {
        let config = Config::new(1000, 4);
        assert_eq!(config.runs, 1);
        assert_eq!(config.dataset.min, 1);
        assert_eq!(config.dataset.max, 100);
        assert_eq!(config.dataset.fill, 1);
        assert_eq!(config.dataset.seed, None);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_display() {
        let mut config = Config::new(10, 2);
        config.dataset.seed = Some(7);
        let text = config.to_string();
        assert!(text.contains("List size:    10"));
        assert!(text.contains("Workers:      2"));
        assert!(text.contains("Seed:         7"));
    }

    #[test]
    fn test_output_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }
}
