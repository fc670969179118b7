//! Embedding provider trait for generating vector embeddings from text.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that generates vector embeddings from text input.
///
/// Implementations wrap a specific embedding backend behind a unified
/// async interface. The pipeline validates every returned vector against
/// [`dimensions`](EmbeddingProvider::dimensions); a mismatch (including
/// an empty vector) is treated as total failure of the retrieval stage.
///
/// # Example
///
/// ```rust,ignore
/// use revisor_rag::EmbeddingProvider;
///
/// let provider = OpenAiEmbeddingProvider::from_env()?;
/// let embedding = provider.embed("Manejo de soja").await?;
/// assert_eq!(embedding.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
