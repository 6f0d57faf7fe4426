//! parmax - sequential vs. partitioned parallel maximum
//!
//! parmax computes the maximum of a numeric sequence twice, once with a
//! single linear scan and once with a partitioned parallel reduction, and
//! reports how long each took.
//!
//! # Architecture
//!
//! - **reduce**: partitioner, workers, aggregator, orchestrator
//! - **dataset**: random and constant input sequences
//! - **coordinator**: runs both methods per case and builds reports
//! - **config**: CLI, TOML file, validation
//! - **output**: text and JSON reports

pub mod config;
pub mod coordinator;
pub mod dataset;
pub mod output;
pub mod reduce;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use reduce::{parallel_max, sequential_max, ReduceError, Reduction};

/// Result type used throughout parmax
pub type Result<T> = anyhow::Result<T>;
