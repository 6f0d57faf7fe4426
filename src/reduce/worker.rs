//! Per-partition maximum scan
//!
//! A `MaxWorker` reads only its own sub-range of the shared sequence and
//! emits exactly one outcome into the intake channel. Workers never touch
//! each other's state.

use super::partition::Partition;
use super::ReduceError;
use crossbeam::channel::Sender;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};

/// Elements scanned between two checks of the stop flag
pub const STOP_CHECK_INTERVAL: usize = 64 * 1024;

static NEVER_STOP: AtomicBool = AtomicBool::new(false);

/// Maximum observed within one partition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialResult<T> {
    /// Index of the partition (and worker) that produced the value
    pub worker: usize,
    pub value: T,
}

/// What a worker hands to the aggregator
pub type WorkerOutcome<T> = Result<PartialResult<T>, ReduceError>;

/// Compute the maximum of a non-empty view
///
/// # Errors
///
/// `EmptyPartition` for an empty view, `WorkerFailure` if an element cannot
/// be ordered against the running maximum (for floats: `NaN`).
///
/// # Example
///
/// ```
/// use parmax::reduce::worker::local_max;
///
/// assert_eq!(local_max(&[3, 7, 2]).unwrap(), 7);
/// assert!(local_max::<i32>(&[]).is_err());
/// ```
pub fn local_max<T>(view: &[T]) -> Result<T, ReduceError>
where
    T: Copy + PartialOrd,
{
    scan_max(view, 0, &NEVER_STOP)
}

fn scan_max<T>(view: &[T], worker: usize, stop: &AtomicBool) -> Result<T, ReduceError>
where
    T: Copy + PartialOrd,
{
    let mut max = *view.first().ok_or(ReduceError::EmptyPartition { worker })?;

    for (block, chunk) in view.chunks(STOP_CHECK_INTERVAL).enumerate() {
        if stop.load(Ordering::Relaxed) {
            return Err(ReduceError::Cancelled);
        }

        for (offset, &value) in chunk.iter().enumerate() {
            match value.partial_cmp(&max) {
                Some(CmpOrdering::Greater) => max = value,
                Some(_) => {}
                None => {
                    return Err(ReduceError::WorkerFailure {
                        worker,
                        reason: format!(
                            "element at offset {} is not comparable",
                            block * STOP_CHECK_INTERVAL + offset
                        ),
                    });
                }
            }
        }
    }

    Ok(max)
}

/// Worker bound to a single partition
#[derive(Debug, Clone, Copy)]
pub struct MaxWorker {
    partition: Partition,
}

impl MaxWorker {
    pub fn new(partition: Partition) -> Self {
        Self { partition }
    }

    pub fn id(&self) -> usize {
        self.partition.index
    }

    /// Scan this worker's partition of `sequence`
    ///
    /// A partition that falls outside `sequence` is reported as a
    /// `WorkerFailure` instead of panicking on the slice.
    pub fn compute<T>(&self, sequence: &[T], stop: &AtomicBool) -> WorkerOutcome<T>
    where
        T: Copy + PartialOrd,
    {
        let view = sequence
            .get(self.partition.range())
            .ok_or_else(|| ReduceError::WorkerFailure {
                worker: self.id(),
                reason: format!(
                    "partition {:?} out of bounds for length {}",
                    self.partition.range(),
                    sequence.len()
                ),
            })?;

        let value = scan_max(view, self.id(), stop)?;
        Ok(PartialResult { worker: self.id(), value })
    }

    /// Compute and emit exactly one outcome into the intake
    ///
    /// The send only fails when the aggregator side has gone away, in which
    /// case there is nobody left to report to.
    pub fn run<T>(self, sequence: &[T], stop: &AtomicBool, intake: &Sender<WorkerOutcome<T>>)
    where
        T: Copy + PartialOrd,
    {
        let outcome = self.compute(sequence, stop);
        if intake.send(outcome).is_err() {
            log::debug!("worker {}: intake closed before send", self.id());
        }
    }
}
