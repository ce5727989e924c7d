//! Ollama HTTP client for local LLM inference
//!
//! One blocking-style round-trip per prompt against the Ollama generate API,
//! with a hard per-request timeout. All transport and protocol failures are
//! normalized into `BackendError` values; nothing here aborts the run.
//!
//! # Example
//!
//! ```no_run
//! use tagbench::backend::{OllamaClient, TagBackend};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::with_timeout(
//!     "http://localhost:11434".to_string(),
//!     "gemma2:2b".to_string(),
//!     Duration::from_secs(10),
//! );
//!
//! if client.health_check().await? {
//!     let suggestion = client.suggest("tag this: 점심 식사").await?;
//!     println!("tags: {:?}", suggestion.tags);
//! }
//! # Ok(())
//! # }
//! ```

use super::{BackendError, TagBackend, TagSuggestion};
use crate::response::parse_tags;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Default request timeout for Ollama API calls
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Sampling temperature; low for consistent tagging
const TEMPERATURE: f32 = 0.1;

/// Generation cap; tag lists are short
const NUM_PREDICT: u32 = 50;

/// Ollama client for local tag inference
///
/// Thread-safe; can be shared across tasks behind an `Arc`.
pub struct OllamaClient {
    /// Ollama API endpoint URL (e.g. "http://localhost:11434")
    endpoint: String,

    /// Model name to use for inference
    model: String,

    /// Shared HTTP client with connection pooling
    http_client: Client,

    /// Request timeout duration
    timeout: Duration,
}

impl OllamaClient {
    /// Creates a client with the default 10 second timeout
    pub fn new(endpoint: String, model: String) -> Self {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom timeout
    pub fn with_timeout(endpoint: String, model: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint,
            model,
            http_client,
            timeout,
        }
    }

    /// Checks whether the Ollama server is reachable
    ///
    /// Lightweight GET against `/api/tags`. Returns `Ok(false)` when the
    /// server is down or unresponsive, `Err` only on unexpected transport
    /// problems.
    pub async fn health_check(&self) -> Result<bool, BackendError> {
        let url = format!("{}/api/tags", self.endpoint);

        debug!("Checking Ollama health at {}", url);

        match self.http_client.get(&url).send().await {
            Ok(response) => {
                let is_healthy = response.status().is_success();
                if is_healthy {
                    info!("Ollama health check successful");
                } else {
                    warn!(
                        "Ollama health check failed with status: {}",
                        response.status()
                    );
                }
                Ok(is_healthy)
            }
            Err(e) => {
                if e.is_timeout() {
                    warn!("Ollama health check timed out");
                    Ok(false)
                } else if e.is_connect() {
                    warn!("Cannot connect to Ollama at {}", self.endpoint);
                    Ok(false)
                } else {
                    error!("Ollama health check error: {}", e);
                    Err(BackendError::NetworkError {
                        message: format!("Health check failed: {}", e),
                    })
                }
            }
        }
    }
}

#[async_trait]
impl TagBackend for OllamaClient {
    /// Sends one tagging prompt to the Ollama generate API
    ///
    /// Elapsed time is measured from request start to the point the outcome
    /// is determined, and returned with the parsed suggestion. Timeouts,
    /// connection failures, non-200 statuses, and unparseable bodies all map
    /// to `BackendError` variants.
    async fn suggest(&self, prompt: &str) -> Result<TagSuggestion, BackendError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
                num_predict: NUM_PREDICT,
            },
        };

        debug!(
            "Sending request to Ollama: model={}, prompt_length={}",
            self.model,
            request.prompt.len()
        );

        let start = Instant::now();

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Ollama request timed out after {:?}", self.timeout);
                    BackendError::TimeoutError {
                        seconds: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    error!("Cannot connect to Ollama at {}", self.endpoint);
                    BackendError::NetworkError {
                        message: format!("Connection failed: {}", e),
                    }
                } else {
                    error!("Ollama request error: {}", e);
                    BackendError::NetworkError {
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            error!("Ollama API returned error status {}: {}", status, body);

            if status.as_u16() == 404 && body.contains("model") {
                return Err(BackendError::Other {
                    message: format!(
                        "Model '{}' not found. Please pull it with: ollama pull {}",
                        self.model, self.model
                    ),
                });
            }

            return Err(BackendError::ApiError {
                message: body,
                status_code: Some(status.as_u16()),
            });
        }

        let generate_response: GenerateResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Ollama response: {}", e);
            BackendError::InvalidResponse {
                message: format!("JSON parse error: {}", e),
            }
        })?;

        let elapsed = start.elapsed();

        let tags = parse_tags(&generate_response.response);
        let eval_tokens = generate_response.eval_count.unwrap_or(0);

        info!(
            "Ollama generation completed in {:.2}s (model={}, tags={:?})",
            elapsed.as_secs_f64(),
            self.model,
            tags
        );

        Ok(TagSuggestion {
            tags,
            elapsed,
            eval_tokens,
        })
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model_info(&self) -> Option<String> {
        Some(format!("{} @ {}", self.model, self.endpoint))
    }
}

impl fmt::Debug for OllamaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Request body for the Ollama generate API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerateRequest {
    /// Model name to use for generation
    model: String,

    /// Prompt text to send to the model
    prompt: String,

    /// Whether to stream the response (false for this use case)
    stream: bool,

    /// Generation options, nested per the Ollama wire format
    options: GenerateOptions,
}

/// Generation options nested under `options` in the request body
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

/// Response body from the Ollama generate API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerateResponse {
    /// Generated response text
    response: String,

    /// Number of tokens generated (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    eval_count: Option<u32>,
}
