//! In-memory vector search using cosine similarity.
//!
//! [`InMemoryVectorSearch`] holds per-collection document lists behind a
//! `tokio::sync::RwLock`. It is suitable for tests and local
//! development, where seeding a real Astra DB collection would be
//! overkill.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::RetrievedDocument;
use crate::error::Result;
use crate::vectorstore::VectorSearch;

/// An in-memory [`VectorSearch`] using cosine similarity.
///
/// Unknown collections return zero results rather than an error, which
/// matches the read-only contract: the caller cannot tell an absent
/// collection from an empty one.
///
/// # Example
///
/// ```rust,ignore
/// use revisor_rag::{InMemoryVectorSearch, VectorSearch};
///
/// let store = InMemoryVectorSearch::new();
/// store.insert("CULTURA", vec![0.1, 0.9], doc).await;
/// let hits = store.vector_search("CULTURA", &[0.1, 0.9], 5).await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryVectorSearch {
    collections: RwLock<HashMap<String, Vec<Entry>>>,
}

#[derive(Debug)]
struct Entry {
    embedding: Vec<f32>,
    document: RetrievedDocument,
}

impl InMemoryVectorSearch {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document with its embedding into a collection, creating
    /// the collection if needed.
    pub async fn insert(
        &self,
        collection: &str,
        embedding: Vec<f32>,
        document: RetrievedDocument,
    ) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Entry { embedding, document });
    }

    /// Number of documents in a collection (0 if absent).
    pub async fn len(&self, collection: &str) -> usize {
        self.collections.read().await.get(collection).map_or(0, Vec::len)
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorSearch for InMemoryVectorSearch {
    async fn vector_search(
        &self,
        collection: &str,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>> {
        let collections = self.collections.read().await;
        let Some(entries) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut scored: Vec<(f32, &Entry)> = entries
            .iter()
            .map(|entry| (cosine_similarity(&entry.embedding, embedding), entry))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        Ok(scored.into_iter().map(|(_, entry)| entry.document.clone()).collect())
    }
}
