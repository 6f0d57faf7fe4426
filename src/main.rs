//! parmax CLI entry point

use anyhow::{Context, Result};
use parmax::config::{cli::Cli, OutputFormat};
use parmax::util::resource::CpuInfo;
use parmax::util::time::format_duration;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);
    cli.validate()?;

    let config = parmax::config::toml::load(&cli)?;
    parmax::config::validator::validate_config(&config)
        .context("Configuration validation failed")?;

    let cpus = CpuInfo::detect();
    log::debug!("{:?}", cpus);
    if cpus.oversubscribed(config.workers) {
        log::warn!(
            "{} workers requested but only {} logical CPUs available",
            config.workers,
            cpus.logical
        );
    }
    if config.workers > config.size {
        log::warn!(
            "{} workers requested for {} elements, clamping to {}",
            config.workers,
            config.size,
            config.size
        );
    }

    if config.output.format == OutputFormat::Text {
        println!("parmax v{}", env!("CARGO_PKG_VERSION"));
        println!("{}", config);
    }

    let reports = parmax::coordinator::run(&config)?;

    let (sequential, parallel) = parmax::coordinator::total_durations(&reports);
    log::debug!(
        "total sequential {}, total parallel {}",
        format_duration(sequential),
        format_duration(parallel)
    );

    let stdout = io::stdout();
    parmax::output::write_report(&mut stdout.lock(), &config, &reports)?;

    let mismatched: Vec<usize> = reports
        .iter()
        .filter(|r| !r.results_match())
        .map(|r| r.case)
        .collect();
    if !mismatched.is_empty() {
        anyhow::bail!(
            "sequential and parallel maxima differ for case(s) {:?}",
            mismatched
        );
    }

    Ok(())
}

/// Route `log` records to stderr
///
/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting
/// to warnings only.
fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp_micros().init();
}
