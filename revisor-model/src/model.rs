//! The `TextModel` trait: single-shot text generation.

use async_trait::async_trait;

use crate::error::Result;

/// A language model consumed as a prompt-in, text-out collaborator.
///
/// The revision pipeline only ever needs one completion per call, so the
/// trait is deliberately minimal: no streaming, no tool calls, no
/// multi-turn history. Implementations wrap a specific provider
/// (Gemini, OpenAI) behind this interface so the pipeline can be
/// constructed with any of them — or with [`MockModel`](crate::MockModel)
/// in tests.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send a prompt and return the model's text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// The model identifier, for logging.
    fn name(&self) -> &str;
}
