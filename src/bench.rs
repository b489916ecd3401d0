// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::counting::{freq_count_counter, freq_count_naive, Method};
use crate::error::BenchError;
use crate::memory::{PeakTracer, TrackingAllocator};
use crate::stats::Summary;
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Aggregated measurements of one counting function over all trials.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    /// Elapsed wall-clock seconds, one entry per trial, in trial order.
    pub times: Vec<f64>,
    /// Peak heap growth in bytes, one entry per trial, in trial order.
    pub peaks: Vec<u64>,
    pub time: Summary,
    pub peak: Summary,
}

impl BenchResult {
    /// Builds the aggregate from raw per-trial samples.
    ///
    /// Fails if there are no samples or the two series differ in length.
    pub fn from_samples(times: Vec<f64>, peaks: Vec<u64>) -> Result<Self, BenchError> {
        if times.len() != peaks.len() {
            return Err(BenchError::InvalidInput(format!(
                "trial series length mismatch: {} times, {} peaks",
                times.len(),
                peaks.len()
            )));
        }
        let peak_samples: Vec<f64> = peaks.iter().map(|&p| p as f64).collect();
        let (time, peak) = match (
            Summary::from_samples(&times),
            Summary::from_samples(&peak_samples),
        ) {
            (Some(t), Some(p)) => (t, p),
            _ => {
                return Err(BenchError::InvalidInput(
                    "at least one trial is required".to_string(),
                ))
            }
        };
        Ok(Self {
            times,
            peaks,
            time,
            peak,
        })
    }

    pub fn trials(&self) -> usize {
        self.times.len()
    }
}

/// Times and memory-profiles `f` over `data` for `trials` runs.
///
/// Each trial opens its own allocation trace around exactly one call of `f`.
/// The result of `f` is kept alive until the trace closes and then
/// discarded; it is not checked for correctness here.
pub fn benchmark<F, R>(f: F, data: &[u32], trials: usize) -> Result<BenchResult, BenchError>
where
    F: Fn(&[u32]) -> R,
{
    if trials == 0 {
        return Err(BenchError::InvalidInput(
            "trial count must be at least 1".to_string(),
        ));
    }
    if !TrackingAllocator::is_installed() {
        warn!("tracking allocator is not the global allocator; peak memory will read 0");
    }

    let mut times = Vec::with_capacity(trials);
    let mut peaks = Vec::with_capacity(trials);

    for trial in 0..trials {
        let tracer = PeakTracer::start()?;
        let t0 = Instant::now();
        let output = black_box(f(black_box(data)));
        let elapsed = t0.elapsed();
        let peak = tracer.stop();
        drop(output);

        debug!(
            trial,
            elapsed_s = elapsed.as_secs_f64(),
            peak_bytes = peak,
            "trial finished"
        );
        times.push(elapsed.as_secs_f64());
        peaks.push(peak);
    }

    BenchResult::from_samples(times, peaks)
}

/// Benchmarks one of the built-in counting methods in its native output shape.
pub fn benchmark_method(
    method: Method,
    data: &[u32],
    trials: usize,
) -> Result<BenchResult, BenchError> {
    let result = match method {
        Method::Naive => benchmark(freq_count_naive, data, trials)?,
        Method::Counter => benchmark(freq_count_counter, data, trials)?,
    };
    info!(
        method = method.key(),
        trials,
        mean_time_s = result.time.mean,
        mean_peak_bytes = result.peak.mean,
        "benchmark finished"
    );
    Ok(result)
}
