//! Report types and JSON persistence
//!
//! One report per run, written as pretty-printed JSON. serde_json leaves
//! non-ASCII characters unescaped, so the Korean task text appears literally
//! in the file.

use crate::samples::LogEntry;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// One successfully scored entry; immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub entry: LogEntry,
    pub suggested: Vec<String>,
    pub expected: Vec<String>,

    /// Jaccard similarity of suggested vs expected, in [0, 1]
    pub accuracy: f64,

    /// Request round-trip time in seconds
    pub response_time: f64,
}

/// Aggregate statistics over one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_samples: usize,
    pub successful: usize,

    /// Mean round-trip time over the successful subset, seconds
    pub avg_response_time: f64,

    /// Mean accuracy over the successful subset
    pub avg_accuracy: f64,

    /// Tokens generated across all successful requests
    pub total_tokens: u64,
}

/// Full run report persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub model: String,

    /// Run timestamp, also used in the output filename
    pub timestamp: String,

    pub summary: Summary,
    pub results: Vec<ScoredRecord>,
}

/// Filename timestamp for the current moment
pub fn run_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Writes the report as pretty JSON into `dir`
///
/// The file is named `tagging_results_{timestamp}.json` so successive runs
/// never collide. Returns the path written.
pub fn write_report(report: &Report, dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(format!("tagging_results_{}.json", report.timestamp));

    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(&path, json).with_context(|| format!("Failed to write report to {:?}", path))?;

    info!("Report written to {:?}", path);

    Ok(path)
}
