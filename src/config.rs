// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::counting::Method;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

fn parse_method(s: &str) -> Result<Method, String> {
    Method::from_key(s).ok_or_else(|| {
        let keys: Vec<_> = Method::ALL.iter().map(|m| m.key()).collect();
        format!("unknown method '{}', expected one of: {}", s, keys.join(", "))
    })
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, rename_all = "kebab-case")]
/// Benchmark data-structure choices for frequency counting.
///
/// Generates one seeded integer sequence and measures time and peak heap
/// usage of a naive linear-scan count against a single-pass HashMap tally.
pub struct BenchConfig {
    /// Number of items to generate
    #[arg(long = "n", default_value_t = 100_000)]
    pub n: usize,

    /// Number of distinct values; items are drawn from [1, k]
    #[arg(long = "k", default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub k: u32,

    /// Number of benchmark trials per method
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub trials: u64,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output directory for results
    #[arg(long, default_value = "results")]
    pub outdir: PathBuf,

    /// Methods to benchmark, comma separated (naive, counter)
    #[arg(long, value_delimiter = ',', value_parser = parse_method, default_values = ["naive", "counter"])]
    pub methods: Vec<Method>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: 100_000,
            k: 1000,
            trials: 3,
            seed: 42,
            outdir: PathBuf::from("results"),
            methods: Method::ALL.to_vec(),
            verbose: 0,
        }
    }
}

impl BenchConfig {
    /// Selected methods in report order, without duplicates.
    pub fn selected_methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|m| self.methods.contains(m))
            .collect()
    }

    /// Default tracing filter for the configured verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "freq_bench=warn",
            1 => "freq_bench=info",
            _ => "freq_bench=debug",
        }
    }
}
