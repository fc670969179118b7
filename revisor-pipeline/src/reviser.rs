//! The grounded-revision orchestrator.

use std::sync::Arc;

use tracing::{debug, info};

use revisor_model::TextModel;
use revisor_rag::{EmbeddingProvider, VectorSearch};

use crate::classifier::Classifier;
use crate::config::RevisorConfig;
use crate::context::build_context;
use crate::error::RevisionError;
use crate::label::Label;
use crate::prompts::{revision_prompt, ADJUSTMENTS_HEADING};

/// The outcome of a revision pass: the rewritten text and its change
/// log as separate fields.
///
/// The generation reply carries both in one string, separated by the
/// adjustments heading; [`RevisionResult::parse`] splits it exactly once
/// so no downstream stage ever re-parses generated prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionResult {
    /// The revised document text.
    pub revised_text: String,
    /// The "Ajustes Técnicos e Correções" section, if the model emitted
    /// one (heading excluded).
    pub change_log: Option<String>,
}

impl RevisionResult {
    /// Split a raw generation reply at the adjustments heading.
    ///
    /// Without the heading, the whole reply is the revised text and
    /// there is no change log.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(ADJUSTMENTS_HEADING) {
            Some((text, log)) => Self {
                revised_text: text.trim_end().to_string(),
                change_log: Some(log.trim_start_matches([':', ' ', '\n']).to_string()),
            },
            None => Self { revised_text: raw.to_string(), change_log: None },
        }
    }
}

/// The revision pipeline: classify → retrieve → ground → rewrite.
///
/// All four collaborators are injected; construct one via
/// [`Revisor::builder()`]. Each call is strictly sequential and each
/// failure short-circuits: a classification error prevents the embedding
/// call, an embedding error prevents retrieval and generation.
pub struct Revisor {
    classifier: Classifier,
    generator: Arc<dyn TextModel>,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorSearch>,
    config: RevisorConfig,
}

impl Revisor {
    /// Create a new [`RevisorBuilder`].
    pub fn builder() -> RevisorBuilder {
        RevisorBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RevisorConfig {
        &self.config
    }

    /// Revise a draft document, grounding the rewrite in retrieved
    /// reference passages.
    ///
    /// With `collection_override` set, that label selects the retrieval
    /// collection verbatim and the classifier is never called; `None`
    /// means automatic classification.
    ///
    /// # Errors
    ///
    /// Classification and embedding failures abort before any later
    /// stage runs; see [`RevisionError`] for the taxonomy. Zero
    /// retrieved documents is not an error — the rewrite proceeds with
    /// the no-results context marker.
    pub async fn revise(
        &self,
        text: &str,
        collection_override: Option<Label>,
    ) -> Result<RevisionResult, RevisionError> {
        // 1. Resolve the collection label.
        let label = match collection_override {
            Some(label) => {
                info!(%label, "collection set by caller");
                label
            }
            None => self.classifier.classify(text).await?,
        };

        // 2. Embed the draft prefix and validate dimensionality.
        let prefix: String = text.chars().take(self.config.embed_prefix_chars).collect();
        let embedding =
            self.embedder.embed(&prefix).await.map_err(RevisionError::EmbeddingCall)?;

        let expected = self.embedder.dimensions();
        if embedding.len() != expected {
            return Err(RevisionError::EmbeddingFailed { expected, actual: embedding.len() });
        }

        // 3. Retrieve nearest reference passages from the label's collection.
        let documents = self
            .store
            .vector_search(label.as_collection(), &embedding, self.config.top_k)
            .await
            .map_err(RevisionError::RetrievalFailed)?;
        debug!(collection = label.as_collection(), count = documents.len(), "retrieval completed");

        // 4. Build the grounding context and the rewrite prompt.
        let rag_context = build_context(&documents, self.config.context_doc_chars);
        let prompt = revision_prompt(text, &rag_context);

        // 5. Single generation call; the reply is split into text and change log.
        let reply =
            self.generator.generate(&prompt).await.map_err(RevisionError::GenerationFailed)?;

        info!(collection = label.as_collection(), reply_len = reply.len(), "revision completed");
        Ok(RevisionResult::parse(&reply))
    }
}

impl std::fmt::Debug for Revisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Revisor").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Revisor`].
///
/// All collaborators are required; `config` defaults to
/// [`RevisorConfig::default()`].
#[derive(Default)]
pub struct RevisorBuilder {
    classifier_model: Option<Arc<dyn TextModel>>,
    generator: Option<Arc<dyn TextModel>>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    store: Option<Arc<dyn VectorSearch>>,
    config: Option<RevisorConfig>,
}

impl RevisorBuilder {
    /// Set the model used for classification.
    pub fn classifier_model(mut self, model: Arc<dyn TextModel>) -> Self {
        self.classifier_model = Some(model);
        self
    }

    /// Set the model used for the rewrite pass.
    pub fn generator(mut self, model: Arc<dyn TextModel>) -> Self {
        self.generator = Some(model);
        self
    }

    /// Set the embedding provider.
    pub fn embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the vector search backend.
    pub fn store(mut self, store: Arc<dyn VectorSearch>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the pipeline configuration.
    pub fn config(mut self, config: RevisorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the [`Revisor`], validating that all collaborators are set.
    ///
    /// # Errors
    ///
    /// Returns [`RevisionError::ConfigError`] if any required
    /// collaborator is missing.
    pub fn build(self) -> Result<Revisor, RevisionError> {
        let classifier_model = self
            .classifier_model
            .ok_or_else(|| RevisionError::ConfigError("classifier_model is required".into()))?;
        let generator = self
            .generator
            .ok_or_else(|| RevisionError::ConfigError("generator is required".into()))?;
        let embedder = self
            .embedder
            .ok_or_else(|| RevisionError::ConfigError("embedder is required".into()))?;
        let store =
            self.store.ok_or_else(|| RevisionError::ConfigError("store is required".into()))?;

        Ok(Revisor {
            classifier: Classifier::new(classifier_model),
            generator,
            embedder,
            store,
            config: self.config.unwrap_or_default(),
        })
    }
}
