//! Gemini text generation client using the `generateContent` REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ModelError, Result};
use crate::model::TextModel;

/// Base URL for the Gemini generative language API.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model used for classification-style completions.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// A [`TextModel`] backed by the Gemini `generateContent` endpoint.
///
/// Calls `POST {base}/models/{model}:generateContent` directly via
/// `reqwest`, with the API key passed as a query parameter.
///
/// # Example
///
/// ```rust,ignore
/// use revisor_model::GeminiModel;
///
/// let model = GeminiModel::new("AIza...")?;
/// let reply = model.generate("Classifique o texto abaixo ...").await?;
/// ```
#[derive(Debug)]
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiModel {
    /// Create a new client with the given API key and the default model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Unavailable`] if the key is empty, so the
    /// caller learns at startup that classification is impossible.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ModelError::Unavailable {
                provider: "Gemini".into(),
                message: "API key must not be empty".into(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.into(),
            base_url: GEMINI_BASE_URL.into(),
        })
    }

    /// Create a new client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| ModelError::Unavailable {
            provider: "Gemini".into(),
            message: "GEMINI_API_KEY environment variable not set".into(),
        })?;
        Self::new(api_key)
    }

    /// Set the model name (e.g. `gemini-1.5-pro`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (for proxies or tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ── Gemini API request/response types ──────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Concatenate the text parts of the first candidate, if any.
fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String =
        candidate.content.parts.into_iter().map(|p| p.text).collect::<Vec<_>>().join("");
    if text.is_empty() { None } else { Some(text) }
}

// ── TextModel implementation ───────────────────────────────────────

#[async_trait]
impl TextModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(provider = "Gemini", model = %self.model, prompt_len = prompt.len(), "generating");

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
        };

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            error!(provider = "Gemini", error = %e, "request failed");
            ModelError::Request {
                provider: "Gemini".into(),
                message: format!("request failed: {e}"),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!(provider = "Gemini", %status, "API error");
            return Err(ModelError::Request {
                provider: "Gemini".into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(provider = "Gemini", error = %e, "failed to parse response");
            ModelError::Response {
                provider: "Gemini".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        first_candidate_text(parsed).ok_or_else(|| ModelError::Response {
            provider: "Gemini".into(),
            message: "response contained no candidate text".into(),
        })
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "PRODUTO"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_candidate_text(response).as_deref(), Some("PRODUTO"));
    }

    #[test]
    fn joins_multiple_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "CUL"}, {"text": "TURA"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_candidate_text(response).as_deref(), Some("CULTURA"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(first_candidate_text(response).is_none());
    }

    #[test]
    fn empty_api_key_is_unavailable() {
        let err = GeminiModel::new("").unwrap_err();
        assert!(matches!(err, ModelError::Unavailable { .. }));
    }
}
