// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use thiserror::Error;

/// Error type for benchmark runs.
///
/// The counting functions themselves are total, so every variant here comes
/// from the harness around them: bad parameters, overlapping trace regions,
/// or the report file.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("An allocation trace region is already open")]
    TraceActive,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
