//! Fan-in fold of partial maxima
//!
//! The aggregator is the single owner of the "max so far" value. It drains
//! the intake channel and folds each `PartialResult` with the max operator,
//! seeded by the first result it sees. Arrival order does not matter.
//!
//! # Example
//!
//! ```
//! use parmax::reduce::aggregator::MaxAggregator;
//! use parmax::reduce::worker::PartialResult;
//!
//! let mut aggregator = MaxAggregator::new();
//! aggregator.add(Ok(PartialResult { worker: 1, value: 9 }));
//! aggregator.add(Ok(PartialResult { worker: 0, value: 7 }));
//!
//! assert_eq!(aggregator.finish(2).unwrap(), 9);
//! ```

use super::worker::WorkerOutcome;
use super::ReduceError;
use crossbeam::channel::Receiver;

/// Serial fold over worker outcomes
#[derive(Debug)]
pub struct MaxAggregator<T> {
    /// Running maximum; `None` until the first partial result arrives
    current: Option<T>,

    /// Number of partial results folded so far
    received: usize,

    /// First failure reported by any worker
    error: Option<ReduceError>,
}

impl<T> MaxAggregator<T>
where
    T: Copy + PartialOrd,
{
    pub fn new() -> Self {
        Self {
            current: None,
            received: 0,
            error: None,
        }
    }

    /// Fold a single worker outcome
    ///
    /// Failures are kept (first one wins) so the invocation can report them;
    /// they are never folded into the maximum.
    pub fn add(&mut self, outcome: WorkerOutcome<T>) {
        match outcome {
            Ok(partial) => {
                self.received += 1;
                self.current = Some(match self.current {
                    Some(max) if max >= partial.value => max,
                    _ => partial.value,
                });
            }
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
    }

    /// Fold everything from `intake` until every sender is dropped
    pub fn drain(&mut self, intake: &Receiver<WorkerOutcome<T>>) {
        for outcome in intake.iter() {
            self.add(outcome);
        }
    }

    pub fn received(&self) -> usize {
        self.received
    }

    /// Produce the global result after exactly `expected` partial results
    ///
    /// # Errors
    ///
    /// The first recorded worker failure, or `MissingResults` if fewer than
    /// `expected` results were folded.
    pub fn finish(self, expected: usize) -> Result<T, ReduceError> {
        if let Some(e) = self.error {
            return Err(e);
        }

        match self.current {
            Some(max) if self.received == expected => Ok(max),
            _ => Err(ReduceError::MissingResults {
                expected,
                received: self.received,
            }),
        }
    }
}

impl<T> Default for MaxAggregator<T>
where
    T: Copy + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
