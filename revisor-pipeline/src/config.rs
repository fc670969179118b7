//! Configuration for the revision pipeline.

use serde::{Deserialize, Serialize};

use crate::error::RevisionError;

/// Tunable parameters of the revision pipeline.
///
/// The defaults reproduce the production behavior: embed only the first
/// 800 characters of the draft (a cost/latency cap), retrieve 10
/// neighbors, and truncate each reference passage to 500 characters in
/// the grounding context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisorConfig {
    /// Number of leading characters of the draft that are embedded.
    pub embed_prefix_chars: usize,
    /// Number of nearest documents requested from the vector store.
    pub top_k: usize,
    /// Per-document character cap in the grounding context.
    pub context_doc_chars: usize,
}

impl Default for RevisorConfig {
    fn default() -> Self {
        Self { embed_prefix_chars: 800, top_k: 10, context_doc_chars: 500 }
    }
}

impl RevisorConfig {
    /// Create a new builder for constructing a [`RevisorConfig`].
    pub fn builder() -> RevisorConfigBuilder {
        RevisorConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RevisorConfig`].
#[derive(Debug, Clone, Default)]
pub struct RevisorConfigBuilder {
    config: RevisorConfig,
}

impl RevisorConfigBuilder {
    /// Set the number of leading characters of the draft to embed.
    pub fn embed_prefix_chars(mut self, chars: usize) -> Self {
        self.config.embed_prefix_chars = chars;
        self
    }

    /// Set the number of nearest documents to retrieve.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the per-document character cap in the grounding context.
    pub fn context_doc_chars(mut self, chars: usize) -> Self {
        self.config.context_doc_chars = chars;
        self
    }

    /// Build the [`RevisorConfig`], validating that all limits are non-zero.
    pub fn build(self) -> Result<RevisorConfig, RevisionError> {
        if self.config.embed_prefix_chars == 0 {
            return Err(RevisionError::ConfigError(
                "embed_prefix_chars must be greater than zero".to_string(),
            ));
        }
        if self.config.top_k == 0 {
            return Err(RevisionError::ConfigError("top_k must be greater than zero".to_string()));
        }
        if self.config.context_doc_chars == 0 {
            return Err(RevisionError::ConfigError(
                "context_doc_chars must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_limits() {
        let config = RevisorConfig::default();
        assert_eq!(config.embed_prefix_chars, 800);
        assert_eq!(config.top_k, 10);
        assert_eq!(config.context_doc_chars, 500);
    }

    #[test]
    fn builder_rejects_zero_limits() {
        assert!(RevisorConfig::builder().top_k(0).build().is_err());
        assert!(RevisorConfig::builder().embed_prefix_chars(0).build().is_err());
        assert!(RevisorConfig::builder().context_doc_chars(0).build().is_err());
    }

    #[test]
    fn builder_accepts_overrides() {
        let config = RevisorConfig::builder().top_k(3).context_doc_chars(200).build().unwrap();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.context_doc_chars, 200);
        assert_eq!(config.embed_prefix_chars, 800);
    }
}
