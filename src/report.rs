// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Report Output
//!
//! Renders per-method benchmark results as a comma-delimited file and as a
//! plain-text console summary.

use crate::bench::BenchResult;
use crate::error::BenchError;
use serde::{Deserialize, Serialize, Serializer};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the report inside the output directory.
pub const REPORT_FILE: &str = "benchmark_results.csv";

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

fn six_dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.6}", value))
}

/// One row of the report file. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub method: String,
    #[serde(serialize_with = "six_dp")]
    pub mean_time_s: f64,
    #[serde(serialize_with = "six_dp")]
    pub stdev_time_s: f64,
    pub mean_peak_bytes: u64,
    pub stdev_peak_bytes: u64,
    /// Per-trial seconds, `;`-separated.
    pub times: String,
    /// Per-trial peak bytes, `;`-separated.
    pub peaks: String,
}

impl CsvRow {
    pub fn new(method: &str, result: &BenchResult) -> Self {
        Self {
            method: method.to_string(),
            mean_time_s: result.time.mean,
            stdev_time_s: result.time.stdev,
            mean_peak_bytes: result.peak.mean as u64,
            stdev_peak_bytes: result.peak.stdev as u64,
            times: join_times(&result.times, ";"),
            peaks: join_peaks(&result.peaks, ";"),
        }
    }

    /// Parses the `times` column back into seconds.
    pub fn parsed_times(&self) -> Result<Vec<f64>, BenchError> {
        split_field(&self.times, "times")
    }

    /// Parses the `peaks` column back into bytes.
    pub fn parsed_peaks(&self) -> Result<Vec<u64>, BenchError> {
        split_field(&self.peaks, "peaks")
    }
}

fn split_field<T: std::str::FromStr>(field: &str, column: &str) -> Result<Vec<T>, BenchError> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field
        .split(';')
        .map(|s| {
            s.parse::<T>().map_err(|_| {
                BenchError::InvalidInput(format!("unparseable {} entry: {:?}", column, s))
            })
        })
        .collect()
}

fn join_times(times: &[f64], sep: &str) -> String {
    times
        .iter()
        .map(|t| format!("{:.6}", t))
        .collect::<Vec<_>>()
        .join(sep)
}

fn join_peaks(peaks: &[u64], sep: &str) -> String {
    peaks
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Writes `<outdir>/benchmark_results.csv`, one row per method, creating
/// `outdir` if needed and replacing any existing report.
pub fn write_csv(results: &[(String, BenchResult)], outdir: &Path) -> Result<PathBuf, BenchError> {
    fs::create_dir_all(outdir)?;
    let path = outdir.join(REPORT_FILE);
    let mut writer = csv::Writer::from_path(&path)?;
    for (method, result) in results {
        writer.serialize(CsvRow::new(method, result))?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = results.len(), "report written");
    Ok(path)
}

/// Reads a report file written by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Vec<CsvRow>, BenchError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Writes the console summary: a confirmation line naming the report, then
/// one block per method.
pub fn write_summary<W: Write>(
    out: &mut W,
    csv_path: &Path,
    results: &[(String, BenchResult)],
) -> Result<(), BenchError> {
    writeln!(out, "Saved results CSV: {}", csv_path.display())?;
    for (method, r) in results {
        writeln!(out)?;
        writeln!(out, "{}", method)?;
        writeln!(
            out,
            "  mean_time_s: {:.6} (stdev {:.6})",
            r.time.mean, r.time.stdev
        )?;
        writeln!(
            out,
            "  mean_peak_mb: {:.2} (stdev {:.2})",
            r.peak.mean / BYTES_PER_MIB,
            r.peak.stdev / BYTES_PER_MIB
        )?;
        writeln!(out, "  times: {}", join_times(&r.times, ", "))?;
        writeln!(out, "  peaks: {}", join_peaks(&r.peaks, ", "))?;
    }
    Ok(())
}
