//! Worker lifecycle for one parallel reduction
//!
//! One invocation moves through these phases:
//!
//! 1. **Dispatching**: one scoped thread per partition
//! 2. **Awaiting**: block on the completion barrier until every worker is done
//! 3. **Closed**: drop the orchestrator's sender, no more results can arrive
//! 4. **Folding**: the aggregator drains the intake
//! 5. **Done**: global maximum and elapsed time are returned
//!
//! The intake is a bounded channel with one slot per worker, so no worker
//! ever blocks on send while the orchestrator is still waiting on the
//! barrier. Any worker failure, including a panic, fails the whole
//! invocation.

use super::aggregator::MaxAggregator;
use super::partition::partition;
use super::worker::{MaxWorker, WorkerOutcome};
use super::ReduceError;
use crate::util::time::Stopwatch;
use crossbeam::channel;
use crossbeam::sync::WaitGroup;
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Duration;

/// Outcome of a successful parallel reduction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction<T> {
    /// Global maximum over the whole sequence
    pub value: T,
    /// Wall-clock time from first dispatch to end of the fold
    pub elapsed: Duration,
    /// Number of workers actually spawned (after clamping)
    pub workers: usize,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Dispatching,
    Awaiting,
    Closed,
    Folding,
    Done,
}

fn enter(phase: Phase) {
    log::trace!("parallel max: {:?}", phase);
}

/// Maximum of `sequence` computed by `workers` threads
///
/// `workers` is clamped to the sequence length.
///
/// # Errors
///
/// `InvalidPartitionRequest` for an empty sequence or zero workers (nothing
/// is spawned in that case), or the first failure reported by any worker.
///
/// # Example
///
/// ```
/// use parmax::reduce::parallel_max;
///
/// let result = parallel_max(&[3, 7, 2, 9, 4], 2).unwrap();
/// assert_eq!(result.value, 9);
/// assert_eq!(result.workers, 2);
/// ```
pub fn parallel_max<T>(sequence: &[T], workers: usize) -> Result<Reduction<T>, ReduceError>
where
    T: Copy + PartialOrd + Send + Sync,
{
    let stop = AtomicBool::new(false);
    parallel_max_with_stop(sequence, workers, &stop)
}

/// Same as [`parallel_max`], but workers give up once `stop` is raised
///
/// A stopped invocation returns `ReduceError::Cancelled` and no maximum.
pub fn parallel_max_with_stop<T>(
    sequence: &[T],
    workers: usize,
    stop: &AtomicBool,
) -> Result<Reduction<T>, ReduceError>
where
    T: Copy + PartialOrd + Send + Sync,
{
    let partitions = partition(sequence.len(), workers)?;
    let spawned = partitions.len();
    if spawned < workers {
        log::debug!(
            "clamped worker count from {} to {} for {} elements",
            workers,
            spawned,
            sequence.len()
        );
    }

    let timer = Stopwatch::start();
    enter(Phase::Dispatching);

    let (intake, outcomes) = channel::bounded::<WorkerOutcome<T>>(spawned);
    let barrier = WaitGroup::new();

    let value = thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .iter()
            .map(|&p| {
                let intake = intake.clone();
                let done = barrier.clone();
                let worker = MaxWorker::new(p);
                log::debug!("dispatch worker {} over {:?}", worker.id(), p.range());
                scope.spawn(move || {
                    worker.run(sequence, stop, &intake);
                    drop(intake);
                    drop(done);
                })
            })
            .collect();

        enter(Phase::Awaiting);
        barrier.wait();

        enter(Phase::Closed);
        drop(intake);

        enter(Phase::Folding);
        let mut aggregator = MaxAggregator::new();
        aggregator.drain(&outcomes);

        // A panicked worker never emitted; name it rather than the shortfall
        let mut panicked = None;
        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(index);
            }
        }
        if let Some(worker) = panicked {
            return Err(ReduceError::WorkerFailure {
                worker,
                reason: "worker thread panicked".to_string(),
            });
        }

        aggregator.finish(spawned)
    })?;

    enter(Phase::Done);
    Ok(Reduction {
        value,
        elapsed: timer.elapsed(),
        workers: spawned,
    })
}
