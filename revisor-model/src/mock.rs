//! A scripted [`TextModel`] for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ModelError, Result};
use crate::model::TextModel;

/// A [`TextModel`] that replays canned replies and records every prompt.
///
/// Replies are consumed in FIFO order; once the queue is empty the last
/// reply is repeated. [`MockModel::failing`] builds a variant whose
/// every call returns [`ModelError::Request`], for exercising failure
/// paths.
///
/// # Example
///
/// ```rust,ignore
/// let model = MockModel::with_reply("PRODUTO");
/// assert_eq!(model.generate("classifique ...").await?, "PRODUTO");
/// assert_eq!(model.prompts().len(), 1);
/// ```
pub struct MockModel {
    replies: Mutex<VecDeque<String>>,
    last_reply: Mutex<Option<String>>,
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl MockModel {
    /// Create a mock with a queue of replies.
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            last_reply: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a mock that always returns the same reply.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::new([reply.into()])
    }

    /// Create a mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            last_reply: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// All prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("mock lock poisoned").clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().expect("mock lock poisoned").len()
    }
}

#[async_trait]
impl TextModel for MockModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().expect("mock lock poisoned").push(prompt.to_string());

        if self.fail {
            return Err(ModelError::Request {
                provider: "Mock".into(),
                message: "scripted failure".into(),
            });
        }

        let mut replies = self.replies.lock().expect("mock lock poisoned");
        if let Some(reply) = replies.pop_front() {
            *self.last_reply.lock().expect("mock lock poisoned") = Some(reply.clone());
            return Ok(reply);
        }

        self.last_reply
            .lock()
            .expect("mock lock poisoned")
            .clone()
            .ok_or_else(|| ModelError::Response {
                provider: "Mock".into(),
                message: "no scripted reply configured".into(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
