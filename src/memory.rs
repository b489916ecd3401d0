// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Allocation tracing
//!
//! A counting wrapper around the system allocator, plus a scoped tracer that
//! reports the peak number of live heap bytes observed while it was open.
//!
//! The allocator only sees allocations once it is installed as the process's
//! global allocator:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: freq_bench::TrackingAllocator = freq_bench::TrackingAllocator;
//! ```
//!
//! Without it every trace reports zero bytes; use
//! [`TrackingAllocator::is_installed`] to detect that case.

use crate::error::BenchError;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);
static INSTALLED: AtomicBool = AtomicBool::new(false);
static TRACING: AtomicBool = AtomicBool::new(false);

/// Global allocator that tracks live and peak heap bytes.
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// True once any allocation has been routed through this allocator.
    pub fn is_installed() -> bool {
        INSTALLED.load(Ordering::Relaxed)
    }

    /// Live heap bytes currently allocated through this allocator.
    pub fn allocated() -> usize {
        ALLOCATED.load(Ordering::Relaxed)
    }

    fn record_alloc(size: usize) {
        let current = ALLOCATED.fetch_add(size, Ordering::Relaxed) + size;
        let mut peak = PEAK.load(Ordering::Relaxed);
        while current > peak {
            match PEAK.compare_exchange_weak(peak, current, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => break,
                Err(p) => peak = p,
            }
        }
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            INSTALLED.store(true, Ordering::Relaxed);
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            INSTALLED.store(true, Ordering::Relaxed);
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                Self::record_alloc(new_size - old_size);
            } else {
                ALLOCATED.fetch_sub(old_size - new_size, Ordering::Relaxed);
            }
        }
        new_ptr
    }
}

/// A single open allocation-trace region.
///
/// Only one region may be open at a time. The region closes on
/// [`PeakTracer::stop`] or when the tracer is dropped.
#[derive(Debug)]
pub struct PeakTracer {
    baseline: usize,
}

impl PeakTracer {
    /// Opens a trace region, resetting the peak to the current live bytes.
    pub fn start() -> Result<Self, BenchError> {
        if TRACING
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(BenchError::TraceActive);
        }
        let baseline = ALLOCATED.load(Ordering::SeqCst);
        PEAK.store(baseline, Ordering::SeqCst);
        Ok(Self { baseline })
    }

    /// Peak growth in bytes above the baseline so far, without closing.
    pub fn peak(&self) -> u64 {
        PEAK.load(Ordering::SeqCst).saturating_sub(self.baseline) as u64
    }

    /// Closes the region and returns the peak growth in bytes.
    pub fn stop(self) -> u64 {
        self.peak()
    }
}

impl Drop for PeakTracer {
    fn drop(&mut self) {
        TRACING.store(false, Ordering::SeqCst);
    }
}
