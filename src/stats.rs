// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation (divisor `N`), or `None` for an empty slice.
///
/// # Example
///
/// ```
/// use freq_bench::stats::pstdev;
///
/// let sd = pstdev(&[1.0, 2.0, 3.0]).unwrap();
/// assert!((sd - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
/// ```
pub fn pstdev(samples: &[f64]) -> Option<f64> {
    let m = mean(samples)?;
    let variance = samples.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / samples.len() as f64;
    Some(variance.sqrt())
}

/// Mean and population standard deviation of one series of trial samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub mean: f64,
    pub stdev: f64,
}

impl Summary {
    /// Summarizes `samples`; `None` when there are no samples.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        Some(Self {
            mean: mean(samples)?,
            stdev: pstdev(samples)?,
        })
    }
}
