//! Error types for the revision pipeline.
//!
//! Callers branch on variants; human-readable text comes only from
//! `Display`. Classification and embedding failures are fatal to the
//! whole revise operation, which is why they get distinct variants the
//! caller can report precisely.

use thiserror::Error;

use revisor_model::ModelError;
use revisor_rag::RagError;

/// Reasons the classification stage can fail.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// The classification model cannot be used (missing credential).
    #[error("classification model unavailable: {0}")]
    Unavailable(String),

    /// The model replied, but the reply matched none of the three
    /// category keywords. Carries the raw reply for diagnosis.
    #[error("unrecognized classification: {reply}")]
    Unrecognized {
        /// The raw (upper-cased) model reply.
        reply: String,
    },

    /// The classification call itself failed.
    #[error("classification call failed: {0}")]
    Model(#[source] ModelError),
}

/// Errors that abort a revise operation.
#[derive(Debug, Error)]
pub enum RevisionError {
    /// Classification failed or was unrecognized; no retrieval or
    /// generation was attempted.
    #[error("classification failed: {0}")]
    Classification(#[from] ClassificationError),

    /// The embedding call failed; no retrieval or generation was
    /// attempted.
    #[error("embedding failed: {0}")]
    EmbeddingCall(#[source] RagError),

    /// The embedding came back with the wrong dimensionality (an empty
    /// vector has `actual == 0`). Treated as total failure of the
    /// retrieval stage, never a partial result.
    #[error("embedding failed: expected {expected} dimensions, got {actual}")]
    EmbeddingFailed {
        /// The dimensionality the provider declared.
        expected: usize,
        /// The dimensionality actually returned.
        actual: usize,
    },

    /// The vector store call failed. Zero results is not this error.
    #[error("retrieval failed: {0}")]
    RetrievalFailed(#[source] RagError),

    /// The rewrite generation call failed.
    #[error("generation failed: {0}")]
    GenerationFailed(#[source] ModelError),

    /// A configuration or builder validation error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
