//! TOML configuration file parsing
//!
//! A config file carries everything except the two positional arguments:
//!
//! ```toml
//! runs = 3
//!
//! [dataset]
//! min = 1
//! max = 1000
//! seed = 42
//!
//! [output]
//! format = "json"
//! ```

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional settings read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub runs: Option<usize>,
    #[serde(default)]
    pub dataset: Option<DatasetConfig>,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<ConfigFile> {
    let config: ConfigFile = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with file settings (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, file: ConfigFile) -> Result<Config> {
    let size = cli_convert::parse_count(&cli.size).context("Invalid list size")?;

    let mut config = Config::new(size, cli.workers);

    if let Some(dataset) = file.dataset {
        config.dataset = dataset;
    }
    if let Some(runs) = file.runs {
        config.runs = runs;
    }
    if let Some(output) = file.output {
        config.output = output;
    }

    if let Some(min) = cli.min {
        config.dataset.min = min;
    }
    if let Some(max) = cli.max {
        config.dataset.max = max;
    }
    if let Some(fill) = cli.fill {
        config.dataset.fill = fill;
    }
    if cli.seed.is_some() {
        config.dataset.seed = cli.seed;
    }
    if let Some(runs) = cli.runs {
        config.runs = runs;
    }
    if let Some(format) = cli.format {
        config.output.format = cli_convert::convert_format(format);
    }

    Ok(config)
}

/// Build the run configuration from CLI arguments and the optional file
pub fn load(cli: &Cli) -> Result<Config> {
    let file = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => ConfigFile::default(),
    };

    merge_cli_with_config(cli, file)
}
