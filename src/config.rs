//! Run configuration for the validation harness
//!
//! All parameters of the validation run (endpoint, model, timeout, sample
//! set, expectations, output location) live in [`BenchConfig`] and are passed
//! into the evaluation routine explicitly. The defaults are the fixed
//! constants of the Phase 0 run; tests substitute their own sample sets and
//! backends.

use crate::samples::{expected_tags, sample_entries, LogEntry};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default values for the fixed validation run
const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "gemma2:2b";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("Model name cannot be empty")]
    EmptyModel,

    #[error("Sample list cannot be empty")]
    NoSamples,

    #[error("Sample entry {index} has an empty {field}")]
    EmptySampleField { index: usize, field: &'static str },
}

/// Parameters for one validation run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Ollama API endpoint URL
    pub endpoint: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Hard per-request timeout
    pub timeout: Duration,

    /// Directory the JSON report is written into
    pub output_dir: PathBuf,

    /// Entries to evaluate, in order
    pub samples: Vec<LogEntry>,

    /// Ground-truth tags keyed by exact task text
    pub expected: HashMap<String, Vec<String>>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            output_dir: PathBuf::from("."),
            samples: sample_entries(),
            expected: expected_tags(),
        }
    }
}

impl BenchConfig {
    /// Validates the configuration before a run
    ///
    /// The prompt builder requires non-empty task and time strings, so both
    /// are checked here once instead of per prompt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if self.samples.is_empty() {
            return Err(ConfigError::NoSamples);
        }
        for (index, entry) in self.samples.iter().enumerate() {
            if entry.task.trim().is_empty() {
                return Err(ConfigError::EmptySampleField {
                    index,
                    field: "task",
                });
            }
            if entry.time.trim().is_empty() {
                return Err(ConfigError::EmptySampleField {
                    index,
                    field: "time",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model, "gemma2:2b");
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.samples.len(), 12);
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = BenchConfig {
            model: "  ".to_string(),
            ..BenchConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyModel)));
    }

    #[test]
    fn test_empty_samples_rejected() {
        let config = BenchConfig {
            samples: Vec::new(),
            ..BenchConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoSamples)));
    }

    #[test]
    fn test_empty_task_rejected() {
        let config = BenchConfig {
            samples: vec![LogEntry::new("09:00:00", "")],
            ..BenchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySampleField { index: 0, .. })
        ));
    }
}
