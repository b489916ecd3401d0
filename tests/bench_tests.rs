// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use freq_bench::*;
use std::hint::black_box;
use std::sync::Mutex;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

// Trace regions are process-wide; tests that open them take this lock.
static TRACE_LOCK: Mutex<()> = Mutex::new(());

const MIB: usize = 1 << 20;

#[test]
fn test_allocator_installed() {
    let v: Vec<u8> = Vec::with_capacity(16);
    black_box(&v);
    assert!(TrackingAllocator::is_installed());
    assert!(TrackingAllocator::allocated() >= 16);
}

#[test]
fn test_tracer_sees_allocation() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let tracer = PeakTracer::start().unwrap();
    let buf = black_box(vec![1u8; 4 * MIB]);
    drop(buf);
    let peak = tracer.stop();
    assert!(peak >= MIB as u64, "peak was {}", peak);
}

#[test]
fn test_tracer_regions_do_not_overlap() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let first = PeakTracer::start().unwrap();
    assert!(matches!(PeakTracer::start(), Err(BenchError::TraceActive)));
    first.stop();

    // Closed regions release the slot, including on drop.
    let second = PeakTracer::start().unwrap();
    drop(second);
    PeakTracer::start().unwrap().stop();
}

#[test]
fn test_trials_reset_peak() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let big = PeakTracer::start().unwrap();
    drop(black_box(vec![0u8; 8 * MIB]));
    let big_peak = big.stop();

    let small = PeakTracer::start().unwrap();
    drop(black_box(vec![0u8; 1024]));
    let small_peak = small.stop();

    assert!(big_peak >= 8 * MIB as u64 - 64 * 1024);
    assert!(small_peak < MIB as u64, "small peak was {}", small_peak);
}

#[test]
fn test_zero_trials_rejected() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let data = vec![1, 2, 3];
    assert!(matches!(
        benchmark(freq_count_counter, &data, 0),
        Err(BenchError::InvalidInput(_))
    ));
}

#[test]
fn test_benchmark_records_every_trial() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let data = dataset::generate(5000, 200, 42).unwrap();

    for method in Method::ALL {
        let result = benchmark_method(method, &data, 5).unwrap();
        assert_eq!(result.trials(), 5);
        assert_eq!(result.peaks.len(), 5);
        assert!(result.times.iter().all(|&t| t >= 0.0));
        assert!(result.time.stdev >= 0.0);
        // Both outputs hold 200 entries at most; each trial must see some heap.
        assert!(result.peaks.iter().all(|&p| p > 0));
    }
}

#[test]
fn test_benchmark_measures_closure_allocation() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let data = vec![0u32; 16];
    let result = benchmark(|d: &[u32]| vec![0u64; d.len() * 65536], &data, 3).unwrap();

    let expected = (16 * 65536 * 8) as u64;
    for &peak in &result.peaks {
        assert!(peak >= expected - 64 * 1024, "peak {} below {}", peak, expected);
    }
    assert!(result.peak.mean >= (expected - 64 * 1024) as f64);
}

#[test]
fn test_benchmark_does_not_validate_output() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let data = vec![1, 1, 2];
    let result = benchmark(|_: &[u32]| Vec::<(u32, u64)>::new(), &data, 2).unwrap();
    assert_eq!(result.trials(), 2);
}

#[test]
fn test_growing_vec_peak_matches_final_capacity() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let data = vec![0u32; 4];
    let result = benchmark(
        |_: &[u32]| {
            let mut v = Vec::new();
            for i in 0..(1u64 << 20) {
                v.push(i);
            }
            v
        },
        &data,
        2,
    )
    .unwrap();

    // 2^20 u64 values; doubling growth lands exactly on 8 MiB of capacity.
    let final_bytes = (8 * MIB) as u64;
    for &peak in &result.peaks {
        assert!(peak >= final_bytes - 64 * 1024, "peak {} below {}", peak, final_bytes);
        assert!(
            (peak as f64) < final_bytes as f64 * 1.25,
            "peak {} exceeds 1.25x of {}",
            peak,
            final_bytes
        );
    }
}

#[test]
fn test_shrink_then_regrow_peak() {
    let _guard = TRACE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let tracer = PeakTracer::start().unwrap();
    let mut buf: Vec<u8> = Vec::with_capacity(4 * MIB);
    buf.push(1);
    buf.shrink_to(MIB);
    buf.reserve_exact(4 * MIB - buf.len());
    black_box(&buf);
    drop(buf);
    let peak = tracer.stop();

    assert!(peak >= 4 * MIB as u64 - 64 * 1024, "peak was {}", peak);
    assert!(peak < (4 * MIB + MIB / 2) as u64, "peak was {}", peak);
}
