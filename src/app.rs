// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::bench::{benchmark_method, BenchResult};
use crate::config::BenchConfig;
use crate::dataset::generate;
use crate::error::BenchError;
use crate::report::{write_csv, write_summary};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Runs every selected benchmark once over a shared dataset, writes the
/// report file and prints the summary to `out`. Returns the report path.
pub fn run<W: Write>(cfg: &BenchConfig, out: &mut W) -> Result<PathBuf, BenchError> {
    let trials = usize::try_from(cfg.trials)
        .map_err(|_| BenchError::InvalidInput(format!("trial count {} is too large", cfg.trials)))?;

    let data = generate(cfg.n, cfg.k, cfg.seed)?;
    info!(n = cfg.n, k = cfg.k, seed = cfg.seed, "dataset generated");

    let mut results: Vec<(String, BenchResult)> = Vec::new();
    for method in cfg.selected_methods() {
        let result = benchmark_method(method, &data, trials)?;
        results.push((method.label().to_string(), result));
    }

    let path = write_csv(&results, &cfg.outdir)?;
    write_summary(out, &path, &results)?;
    Ok(path)
}
