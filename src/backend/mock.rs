//! Deterministic stub backend for tests

use super::{BackendError, TagBackend, TagSuggestion};
use crate::response::parse_tags;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Stub backend that replays a queue of canned replies
///
/// Each call to [`TagBackend::suggest`] pops the next reply. Text replies go
/// through the same tag normalization as real Ollama output, so tests
/// exercise the production parsing path.
pub struct MockTagBackend {
    replies: Mutex<VecDeque<MockReply>>,
    name: String,
}

/// One canned reply in the mock queue
#[derive(Debug, Clone)]
pub struct MockReply {
    pub text: String,
    pub eval_tokens: u32,
    pub error: Option<BackendError>,
}

impl MockReply {
    /// Successful reply with the given raw response text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            eval_tokens: 0,
            error: None,
        }
    }

    /// Successful reply with a token count
    pub fn with_tokens(text: impl Into<String>, eval_tokens: u32) -> Self {
        Self {
            text: text.into(),
            eval_tokens,
            error: None,
        }
    }

    /// Failing reply
    pub fn error(error: BackendError) -> Self {
        Self {
            text: String::new(),
            eval_tokens: 0,
            error: Some(error),
        }
    }
}

impl MockTagBackend {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            name: "MockTagBackend".to_string(),
        }
    }

    /// Mock that answers every prompt with the same text, `count` times
    pub fn echoing(text: impl Into<String>, count: usize) -> Self {
        let backend = Self::new();
        let text = text.into();
        backend.add_replies((0..count).map(|_| MockReply::text(text.clone())));
        backend
    }

    pub fn add_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn add_replies(&self, replies: impl IntoIterator<Item = MockReply>) {
        let mut queue = self.replies.lock().unwrap();
        for reply in replies {
            queue.push_back(reply);
        }
    }

    pub fn remaining_replies(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

impl Default for MockTagBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagBackend for MockTagBackend {
    async fn suggest(&self, _prompt: &str) -> Result<TagSuggestion, BackendError> {
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| BackendError::Other {
                message: "MockTagBackend: no more replies in queue".to_string(),
            })?;

        if let Some(error) = reply.error {
            return Err(error);
        }

        Ok(TagSuggestion {
            tags: parse_tags(&reply.text),
            elapsed: Duration::from_millis(10),
            eval_tokens: reply.eval_tokens,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn model_info(&self) -> Option<String> {
        Some("mock-model".to_string())
    }
}

impl std::fmt::Debug for MockTagBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTagBackend")
            .field("name", &self.name)
            .field("remaining_replies", &self.remaining_replies())
            .finish()
    }
}
