// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Frequency count by linear scan.
///
/// Collects the distinct values first, then counts each one with a full pass
/// over `data`. Cost is `O(distinct × N)`, which degrades towards quadratic as
/// the number of distinct values grows with the input.
///
/// The order of the returned pairs follows hash-set iteration and is not
/// stable between runs.
///
/// # Example
///
/// ```
/// use freq_bench::freq_count_naive;
///
/// let mut pairs = freq_count_naive(&[3, 1, 3]);
/// pairs.sort();
/// assert_eq!(pairs, vec![(1, 1), (3, 2)]);
/// ```
pub fn freq_count_naive(data: &[u32]) -> Vec<(u32, u64)> {
    let unique: HashSet<u32> = data.iter().copied().collect();
    let mut result = Vec::with_capacity(unique.len());
    for value in unique {
        let count = data.iter().filter(|&&x| x == value).count() as u64;
        result.push((value, count));
    }
    result
}

/// Frequency count with a single pass into a `HashMap` tally. `O(N)` time.
///
/// # Example
///
/// ```
/// use freq_bench::freq_count_counter;
///
/// let tally = freq_count_counter(&[3, 1, 3]);
/// assert_eq!(tally[&3], 2);
/// assert_eq!(tally[&1], 1);
/// ```
pub fn freq_count_counter(data: &[u32]) -> HashMap<u32, u64> {
    let mut tally = HashMap::new();
    for &value in data {
        *tally.entry(value).or_insert(0) += 1;
    }
    tally
}

/// Normalized view over a frequency result.
///
/// The two counting functions return different shapes; both reduce to the
/// same ordered `value -> count` mapping so their content can be compared
/// directly.
pub trait Tally {
    /// Returns the counts as an ordered mapping.
    fn to_tally(&self) -> BTreeMap<u32, u64>;

    /// Number of distinct values counted.
    fn distinct(&self) -> usize;

    /// Sum of all counts, i.e. the length of the input that produced it.
    fn total(&self) -> u64 {
        self.to_tally().values().sum()
    }
}

impl Tally for Vec<(u32, u64)> {
    fn to_tally(&self) -> BTreeMap<u32, u64> {
        let mut tally = BTreeMap::new();
        for &(value, count) in self {
            *tally.entry(value).or_insert(0) += count;
        }
        tally
    }

    fn distinct(&self) -> usize {
        self.len()
    }
}

impl Tally for HashMap<u32, u64> {
    fn to_tally(&self) -> BTreeMap<u32, u64> {
        self.iter().map(|(&value, &count)| (value, count)).collect()
    }

    fn distinct(&self) -> usize {
        self.len()
    }
}

/// The counting implementations under benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Naive,
    Counter,
}

impl Method {
    /// All methods, in report order.
    pub const ALL: [Method; 2] = [Method::Naive, Method::Counter];

    /// Human-readable label used as the report's `method` column.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Naive => "Naive (linear scan per distinct value)",
            Method::Counter => "Optimized (HashMap tally)",
        }
    }

    /// Short key accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Method::Naive => "naive",
            Method::Counter => "counter",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Runs the implementation and returns its full result in normalized form.
    pub fn count(&self, data: &[u32]) -> BTreeMap<u32, u64> {
        match self {
            Method::Naive => freq_count_naive(data).to_tally(),
            Method::Counter => freq_count_counter(data).to_tally(),
        }
    }
}
