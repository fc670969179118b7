//! Stub collaborators shared by the pipeline integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use revisor_rag::document::RetrievedDocument;
use revisor_rag::embedding::EmbeddingProvider;
use revisor_rag::error::Result;
use revisor_rag::vectorstore::VectorSearch;

/// An embedder that returns a fixed vector and counts its calls.
pub struct StubEmbedder {
    vector: Vec<f32>,
    dimensions: usize,
    calls: AtomicUsize,
}

impl StubEmbedder {
    /// An embedder whose vectors match its declared dimensionality.
    pub fn valid(dimensions: usize) -> Self {
        Self { vector: vec![0.1; dimensions], dimensions, calls: AtomicUsize::new(0) }
    }

    /// An embedder that declares `dimensions` but returns vectors of
    /// `actual_len` (use 0 for the empty-embedding case).
    pub fn mismatched(dimensions: usize, actual_len: usize) -> Self {
        Self { vector: vec![0.1; actual_len], dimensions, calls: AtomicUsize::new(0) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vector.clone())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// A store that returns fixed documents and records every search.
#[derive(Default)]
pub struct StubStore {
    documents: Vec<RetrievedDocument>,
    searches: Mutex<Vec<(String, usize)>>,
}

impl StubStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_documents(count: usize) -> Self {
        let documents = (0..count)
            .map(|i| RetrievedDocument::from_value(json!({ "titulo": format!("Fonte {i}") })))
            .collect();
        Self { documents, searches: Mutex::new(Vec::new()) }
    }

    /// The `(collection, limit)` pairs of every search received.
    pub fn searches(&self) -> Vec<(String, usize)> {
        self.searches.lock().expect("stub lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.searches.lock().expect("stub lock poisoned").len()
    }
}

#[async_trait]
impl VectorSearch for StubStore {
    async fn vector_search(
        &self,
        collection: &str,
        _embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>> {
        self.searches
            .lock()
            .expect("stub lock poisoned")
            .push((collection.to_string(), limit));
        Ok(self.documents.clone())
    }
}
