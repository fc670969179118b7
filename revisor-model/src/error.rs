//! Error types for the `revisor-model` crate.

use thiserror::Error;

/// Errors that can occur when calling a language model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The client cannot be used at all (missing or empty credential).
    ///
    /// Raised at construction time so callers fail fast instead of
    /// attempting a doomed network call.
    #[error("Model unavailable ({provider}): {message}")]
    Unavailable {
        /// The provider that is unavailable.
        provider: String,
        /// A description of what is missing.
        message: String,
    },

    /// The request could not be sent, or the API returned a non-success status.
    #[error("Model request failed ({provider}): {message}")]
    Request {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The API replied, but the reply could not be interpreted.
    #[error("Model response invalid ({provider}): {message}")]
    Response {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
