//! OpenAI chat completion client with a fixed system role.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ModelError, Result};
use crate::model::TextModel;

/// The OpenAI chat completions endpoint.
const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for revision passes.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// The system role every revision call carries.
const DEFAULT_SYSTEM_PROMPT: &str =
    "Você é um agente de revisão técnica altamente preciso.";

/// A [`TextModel`] backed by the OpenAI chat completions API.
///
/// Every [`generate`](TextModel::generate) call sends two messages: the
/// fixed system role (a precise technical review agent) and the prompt
/// as the user message. The first choice's message content is the reply.
///
/// # Example
///
/// ```rust,ignore
/// use revisor_model::OpenAiChatModel;
///
/// let model = OpenAiChatModel::new("sk-...")?;
/// let reply = model.generate("Revise o texto ...").await?;
/// ```
#[derive(Debug)]
pub struct OpenAiChatModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    system_prompt: String,
    url: String,
}

impl OpenAiChatModel {
    /// Create a new client with the given API key and the default model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Unavailable`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ModelError::Unavailable {
                provider: "OpenAI".into(),
                message: "API key must not be empty".into(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            url: OPENAI_CHAT_URL.into(),
        })
    }

    /// Create a new client from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| ModelError::Unavailable {
            provider: "OpenAI".into(),
            message: "OPENAI_API_KEY environment variable not set".into(),
        })?;
        Self::new(api_key)
    }

    /// Set the model name (e.g. `gpt-4o-mini`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replace the fixed system role content.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Override the API endpoint URL (for compatible servers or tests).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

// ── OpenAI API request/response types ──────────────────────────────

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

// ── TextModel implementation ───────────────────────────────────────

#[async_trait]
impl TextModel for OpenAiChatModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(provider = "OpenAI", model = %self.model, prompt_len = prompt.len(), "generating");

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: &self.system_prompt },
                ChatMessage { role: "user", content: prompt },
            ],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "OpenAI", error = %e, "request failed");
                ModelError::Request {
                    provider: "OpenAI".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            error!(provider = "OpenAI", %status, "API error");
            return Err(ModelError::Request {
                provider: "OpenAI".into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(provider = "OpenAI", error = %e, "failed to parse response");
            ModelError::Response {
                provider: "OpenAI".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ModelError::Response {
                provider: "OpenAI".into(),
                message: "response contained no choices".into(),
            })
    }

    fn name(&self) -> &str {
        &self.model
    }
}
