//! Vector search trait over named collections.

use async_trait::async_trait;

use crate::document::RetrievedDocument;
use crate::error::Result;

/// A similarity-search collaborator over named vector collections.
///
/// The revisor treats the vector database as an external service: it
/// only ever reads. Collection names are the topical bucket strings
/// (`PRODUTO`, `CULTURA`, `OUTROS`); ingestion and index management
/// happen elsewhere.
///
/// Zero results is a valid outcome, not an error.
#[async_trait]
pub trait VectorSearch: Send + Sync {
    /// Return up to `limit` documents nearest to `embedding` in the
    /// given collection, most similar first.
    async fn vector_search(
        &self,
        collection: &str,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>>;
}
