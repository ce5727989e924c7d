//! tagbench - Phase 0 validation harness for local LLM activity tagging
//!
//! Sends a fixed set of Korean work-log entries to a locally hosted model
//! (Ollama), measures latency, scores suggested tags against hand-labeled
//! ground truth with Jaccard similarity, and renders a GO/NO-GO
//! recommendation plus a JSON report.
//!
//! # Core Concepts
//!
//! - **Prompt Builder**: few-shot instruction string per log entry
//! - **Tag Backend**: pluggable inference client (`OllamaClient` for the real
//!   run, `MockTagBackend` for tests)
//! - **Scorer**: order-insensitive Jaccard similarity with an
//!   empty-set-is-zero policy
//! - **Evaluation Loop**: sequential measure-and-report pass over the sample
//!   list with threshold tiers and a final verdict
//!
//! # Example
//!
//! ```no_run
//! use tagbench::backend::OllamaClient;
//! use tagbench::config::BenchConfig;
//! use tagbench::eval::run_validation;
//! use tagbench::report::write_report;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = BenchConfig::default();
//! config.validate()?;
//!
//! let client = OllamaClient::with_timeout(
//!     config.endpoint.clone(),
//!     config.model.clone(),
//!     config.timeout,
//! );
//!
//! let outcome = run_validation(&config, &client).await;
//! let path = write_report(&outcome.report, &config.output_dir)?;
//! println!("Detailed results saved to: {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod eval;
pub mod prompt;
pub mod report;
pub mod response;
pub mod samples;
pub mod scoring;
pub mod util;

// Re-export key types for convenient access
pub use backend::{BackendError, MockReply, MockTagBackend, OllamaClient, TagBackend, TagSuggestion};
pub use config::{BenchConfig, ConfigError};
pub use eval::{run_validation, AccuracyTier, LatencyTier, RunOutcome, Verdict};
pub use report::{write_report, Report, ScoredRecord, Summary};
pub use samples::LogEntry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
