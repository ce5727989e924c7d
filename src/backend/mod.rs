//! Inference backend abstraction
//!
//! The harness talks to the model through the [`TagBackend`] trait so tests
//! can substitute a deterministic stub for the real Ollama service. Failure
//! is an expected, locally-handled outcome, so it is modeled as an explicit
//! error value rather than a panic or an aborting propagation.

pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub use mock::{MockReply, MockTagBackend};
pub use ollama::OllamaClient;

/// Successful inference outcome for one prompt
#[derive(Debug, Clone, PartialEq)]
pub struct TagSuggestion {
    /// Normalized tags, at most three
    pub tags: Vec<String>,

    /// Wall-clock time from request start to parsed response
    pub elapsed: Duration,

    /// Tokens generated by the backend (0 when the backend omits the count)
    pub eval_tokens: u32,
}

/// Errors that can occur during backend operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BackendError {
    /// API request failed with a non-success status
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// Request timed out after the specified duration (in seconds)
    TimeoutError { seconds: u64 },

    /// Network-related error (connection refused, DNS, transport)
    NetworkError { message: String },

    /// Invalid or malformed response body from the backend
    InvalidResponse { message: String },

    /// Generic error for other cases
    Other { message: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::ApiError {
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "HTTP {}: {}", code, message)
                } else {
                    write!(f, "API error: {}", message)
                }
            }
            BackendError::TimeoutError { seconds } => {
                write!(f, "Request timed out after {} seconds", seconds)
            }
            BackendError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            BackendError::InvalidResponse { message } => {
                write!(f, "Invalid response from backend: {}", message)
            }
            BackendError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for BackendError {}

/// Capability interface for tag-suggesting inference backends
///
/// Implementations must never panic on backend failures; every transport or
/// protocol problem surfaces as a `BackendError` the evaluation loop handles
/// per entry.
#[async_trait]
pub trait TagBackend: Send + Sync {
    /// Sends one prompt and returns the normalized suggestion or a failure
    async fn suggest(&self, prompt: &str) -> Result<TagSuggestion, BackendError>;

    /// Human-readable name of this backend
    fn name(&self) -> &str;

    /// Optional model/endpoint information for logging
    fn model_info(&self) -> Option<String> {
        None
    }
}
