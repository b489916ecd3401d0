//! # freq-bench
//!
//! Measures wall-clock time and peak heap usage of two frequency-counting
//! implementations over the same seeded integer sequence: a naive scan per
//! distinct value and a single-pass `HashMap` tally.

pub mod app;
pub mod bench;
pub mod config;
pub mod counting;
pub mod dataset;
pub mod error;
pub mod memory;
pub mod report;
pub mod stats;

pub use bench::{benchmark, benchmark_method, BenchResult};
pub use config::BenchConfig;
pub use counting::{freq_count_counter, freq_count_naive, Method, Tally};
pub use error::BenchError;
pub use memory::{PeakTracer, TrackingAllocator};
pub use report::{read_csv, write_csv, write_summary, CsvRow, REPORT_FILE};
pub use stats::Summary;
