// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::error::BenchError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `n` integers drawn uniformly from `[1, k]`.
///
/// The generator is seeded from `seed` on every call, so identical
/// `(n, k, seed)` triples always produce identical sequences.
///
/// # Example
///
/// ```
/// use freq_bench::dataset::generate;
///
/// let a = generate(1000, 50, 7).unwrap();
/// let b = generate(1000, 50, 7).unwrap();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|&v| (1..=50).contains(&v)));
/// ```
pub fn generate(n: usize, k: u32, seed: u64) -> Result<Vec<u32>, BenchError> {
    if k == 0 {
        return Err(BenchError::InvalidInput(
            "distinct cardinality k must be at least 1".to_string(),
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n).map(|_| rng.random_range(1..=k)).collect())
}

