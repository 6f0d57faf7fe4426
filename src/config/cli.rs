//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable report
    Text,
    /// Machine-readable JSON document
    Json,
}

/// parmax - sequential vs. parallel maximum reduction
#[derive(Parser, Debug)]
#[command(name = "parmax")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of elements per test case (e.g., 1000000, 500k, 10m)
    #[arg(value_name = "SIZE")]
    pub size: String,

    /// Number of worker threads for the parallel reduction
    #[arg(value_name = "NUM_THREADS")]
    pub workers: usize,

    // === Dataset Options ===
    /// Inclusive lower bound for random values
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Inclusive upper bound for random values
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Value used for the constant test case
    #[arg(long, allow_negative_numbers = true)]
    pub fill: Option<i64>,

    /// PRNG seed for reproducible random data
    #[arg(long, env = "PARMAX_SEED")]
    pub seed: Option<u64>,

    // === Run Options ===
    /// Repetitions per case (fastest run is reported)
    #[arg(short = 'r', long)]
    pub runs: Option<usize>,

    // === Output Options ===
    /// Report format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,

    /// TOML configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == 0 {
            anyhow::bail!("NUM_THREADS must be at least 1");
        }

        if let Some(runs) = self.runs {
            if runs == 0 {
                anyhow::bail!("runs must be at least 1");
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                anyhow::bail!("min ({}) must not exceed max ({})", min, max);
            }
        }

        Ok(())
    }
}
