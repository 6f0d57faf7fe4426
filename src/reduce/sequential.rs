//! Single-pass baseline scan

use super::worker::local_max;
use super::ReduceError;
use crate::util::time::Stopwatch;
use std::time::Duration;

/// Maximum of `sequence` in one linear scan on the calling thread
pub fn sequential_max<T>(sequence: &[T]) -> Result<T, ReduceError>
where
    T: Copy + PartialOrd,
{
    local_max(sequence)
}

/// Baseline scan together with its wall-clock time
pub fn timed_sequential_max<T>(sequence: &[T]) -> Result<(T, Duration), ReduceError>
where
    T: Copy + PartialOrd,
{
    let (max, elapsed) = Stopwatch::measure(|| sequential_max(sequence));
    Ok((max?, elapsed))
}
