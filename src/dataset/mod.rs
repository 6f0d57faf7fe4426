//! Input sequence generation
//!
//! Each run reduces two sequences of the same size: one drawn uniformly
//! from a bounded range and one filled with a single constant value.
//!
//! # Example
//!
//! ```
//! use parmax::dataset::{generate_random, generate_constant};
//!
//! let random = generate_random(1000, 1, 100, Some(42));
//! assert!(random.iter().all(|&v| (1..=100).contains(&v)));
//!
//! let constant = generate_constant(1000, 1);
//! assert!(constant.iter().all(|&v| v == 1));
//! ```

use crate::config::DatasetConfig;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a generated sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Uniform draws from `[min, max]`
    Random,
    /// Every element equal to the fill value
    Constant,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Random => write!(f, "random"),
            DatasetKind::Constant => write!(f, "constant"),
        }
    }
}

/// One generated input sequence
#[derive(Debug, Clone)]
pub struct TestCase {
    pub kind: DatasetKind,
    pub values: Vec<i64>,
}

/// Uniform values in `[min, max]`
///
/// With a seed the sequence is reproducible; without one the PRNG is seeded
/// from OS entropy. Xoshiro256++ keeps generation cheap for large sizes.
pub fn generate_random(size: usize, min: i64, max: i64, seed: Option<u64>) -> Vec<i64> {
    let mut rng = match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    (0..size).map(|_| rng.gen_range(min..=max)).collect()
}

/// `size` copies of `value`
pub fn generate_constant(size: usize, value: i64) -> Vec<i64> {
    vec![value; size]
}

/// The random case followed by the constant case
pub fn build_cases(size: usize, dataset: &DatasetConfig) -> Vec<TestCase> {
    log::debug!(
        "generating {} elements: random [{}, {}] seed={:?}, constant {}",
        size,
        dataset.min,
        dataset.max,
        dataset.seed,
        dataset.fill
    );

    vec![
        TestCase {
            kind: DatasetKind::Random,
            values: generate_random(size, dataset.min, dataset.max, dataset.seed),
        },
        TestCase {
            kind: DatasetKind::Constant,
            values: generate_constant(size, dataset.fill),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_within_range() {
        let values = generate_random(10_000, -5, 5, None);
        assert_eq!(values.len(), 10_000);
        assert!(values.iter().all(|&v| (-5..=5).contains(&v)));
    }

    #[test]
    fn test_random_seeded_reproducible() {
        let a = generate_random(100, 1, 100, Some(12345));
        let b = generate_random(100, 1, 100, Some(12345));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_coverage() {
        let values = generate_random(10_000, 1, 10, Some(42));
        for v in 1..=10 {
            assert!(values.contains(&v), "value {} never drawn", v);
        }
    }

    #[test]
    fn test_random_degenerate_range() {
        let values = generate_random(50, 7, 7, Some(1));
        assert!(values.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_constant() {
        assert_eq!(generate_constant(3, 1), vec![1, 1, 1]);
        assert!(generate_constant(0, 1).is_empty());
    }

    #[test]
    fn test_build_cases_order() {
        let dataset = DatasetConfig {
            min: 1,
            max: 100,
            fill: 1,
            seed: Some(9),
        };
        let cases = build_cases(20, &dataset);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].kind, DatasetKind::Random);
        assert_eq!(cases[1].kind, DatasetKind::Constant);
        assert!(cases.iter().all(|c| c.values.len() == 20));
        assert!(cases[1].values.iter().all(|&v| v == 1));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DatasetKind::Random.to_string(), "random");
        assert_eq!(DatasetKind::Constant.to_string(), "constant");
    }
}
