//! Error taxonomy for the parallel reduction

use thiserror::Error;

/// Failures surfaced by the partitioner, the workers, or the orchestrator.
///
/// None of these are recovered internally: a failed invocation never yields
/// a best-effort maximum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// Zero length or zero workers passed to the partitioner
    #[error("invalid partition request: length={length}, workers={workers}")]
    InvalidPartitionRequest { length: usize, workers: usize },

    /// A worker was handed a zero-length view
    #[error("worker {worker} received an empty partition")]
    EmptyPartition { worker: usize },

    /// A worker could not produce its partial result
    #[error("worker {worker} failed: {reason}")]
    WorkerFailure { worker: usize, reason: String },

    /// Fewer partial results reached the aggregator than workers were spawned
    #[error("expected {expected} partial results, received {received}")]
    MissingResults { expected: usize, received: usize },

    /// The stop flag was raised before every worker finished
    #[error("reduction cancelled")]
    Cancelled,
}

impl ReduceError {
    /// Whether this error originated inside a worker thread
    pub fn is_worker_side(&self) -> bool {
        matches!(
            self,
            ReduceError::EmptyPartition { .. }
                | ReduceError::WorkerFailure { .. }
                | ReduceError::MissingResults { .. }
        )
    }
}
