//! Partitioned parallel maximum reduction
//!
//! The sequence is split into equal-sized contiguous partitions, one worker
//! thread scans each partition, and a single aggregator folds the partial
//! maxima into the global maximum.
//!
//! # Components
//!
//! - **partition**: `[0, len)` into disjoint, exhaustive, non-empty ranges
//! - **worker**: local maximum of one range, emitted once into the intake
//! - **aggregator**: serial fold of partial maxima
//! - **orchestrator**: spawn, barrier, close, fold, time
//! - **sequential**: single-threaded baseline for comparison
//!
//! # Example
//!
//! ```
//! use parmax::reduce::{parallel_max, sequential_max};
//!
//! let data: Vec<i64> = (0..1_000).map(|i| (i * 37) % 101).collect();
//! let reduction = parallel_max(&data, 4).unwrap();
//!
//! assert_eq!(reduction.value, sequential_max(&data).unwrap());
//! ```

pub mod aggregator;
pub mod error;
pub mod orchestrator;
pub mod partition;
pub mod sequential;
pub mod worker;

pub use error::ReduceError;
pub use orchestrator::{parallel_max, parallel_max_with_stop, Reduction};
pub use partition::{effective_workers, partition, Partition};
pub use sequential::{sequential_max, timed_sequential_max};
