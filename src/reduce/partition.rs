//! Static partitioning of a sequence into contiguous chunks
//!
//! Every worker gets `length / workers` elements; the last worker also takes
//! the remainder. When more workers are requested than there are elements,
//! the worker count is clamped down to the length so no partition is empty.
//!
//! # Example
//!
//! ```
//! use parmax::reduce::partition::partition;
//!
//! let parts = partition(5, 2).unwrap();
//! assert_eq!(parts[0].range(), 0..2);
//! assert_eq!(parts[1].range(), 2..5);
//! ```

use super::ReduceError;
use std::ops::Range;

/// Half-open index range `[start, end)` assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Position of this partition in the ordered partition list
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    /// Number of elements covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Worker count actually used for a sequence of `length` elements
///
/// Clamps `requested` to `length`. Zero inputs are passed through unchanged
/// so that `partition` can reject them.
pub fn effective_workers(length: usize, requested: usize) -> usize {
    requested.min(length)
}

/// Split `[0, length)` into contiguous, disjoint, non-empty partitions
///
/// # Errors
///
/// Returns `InvalidPartitionRequest` if `length` or `workers` is zero.
pub fn partition(length: usize, workers: usize) -> Result<Vec<Partition>, ReduceError> {
    if length == 0 || workers == 0 {
        return Err(ReduceError::InvalidPartitionRequest { length, workers });
    }

    let workers = effective_workers(length, workers);
    let chunk_size = length / workers;

    let parts = (0..workers)
        .map(|index| {
            let start = index * chunk_size;
            let end = if index == workers - 1 {
                length // last worker absorbs the remainder
            } else {
                start + chunk_size
            };
            Partition { index, start, end }
        })
        .collect();

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exhaustive(parts: &[Partition], length: usize) {
        let mut next = 0;
        for (i, p) in parts.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.start, next, "gap or overlap at partition {}", i);
            assert!(!p.is_empty(), "partition {} is empty", i);
            next = p.end;
        }
        assert_eq!(next, length);
    }

    #[test]
    fn test_partition_even_split() {
        let parts = partition(8, 4).unwrap();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.len() == 2));
        assert_exhaustive(&parts, 8);
    }

    #[test]
    fn test_partition_remainder_goes_last() {
        let parts = partition(5, 2).unwrap();
        assert_eq!(parts[0].range(), 0..2);
        assert_eq!(parts[1].range(), 2..5);
    }

    #[test]
    fn test_partition_clamps_excess_workers() {
        let parts = partition(5, 10).unwrap();
        assert_eq!(parts.len(), 5);
        assert!(parts.iter().all(|p| p.len() == 1));
        assert_exhaustive(&parts, 5);
    }

    #[test]
    fn test_partition_single_element() {
        let parts = partition(1, 7).unwrap();
        assert_eq!(parts, vec![Partition { index: 0, start: 0, end: 1 }]);
    }

    #[test]
    fn test_partition_single_worker() {
        let parts = partition(1000, 1).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].range(), 0..1000);
    }

    #[test]
    fn test_partition_rejects_zero() {
        assert_eq!(
            partition(0, 3),
            Err(ReduceError::InvalidPartitionRequest { length: 0, workers: 3 })
        );
        assert_eq!(
            partition(3, 0),
            Err(ReduceError::InvalidPartitionRequest { length: 3, workers: 0 })
        );
    }

    #[test]
    fn test_partition_invariants_exhaustive_small() {
        for length in 1..=64 {
            for workers in 1..=80 {
                let parts = partition(length, workers).unwrap();
                assert_eq!(parts.len(), effective_workers(length, workers));
                assert_exhaustive(&parts, length);
            }
        }
    }

    #[test]
    fn test_effective_workers() {
        assert_eq!(effective_workers(10, 4), 4);
        assert_eq!(effective_workers(3, 4), 3);
        assert_eq!(effective_workers(0, 4), 0);
    }
}
