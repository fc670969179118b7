//! # revisor-rag
//!
//! Retrieval layer for the agronomic text revisor.
//!
//! The revision pipeline grounds its rewrite prompts in reference
//! passages retrieved from per-topic vector collections. This crate
//! provides the two collaborator traits that stage needs —
//! [`EmbeddingProvider`] and [`VectorSearch`] — together with:
//!
//! - [`OpenAiEmbeddingProvider`] — `text-embedding-3-small` embeddings
//!   (1536 dimensions) via the OpenAI API.
//! - [`AstraDbSearch`] — nearest-neighbor search over Astra DB Data API
//!   collections.
//! - [`InMemoryVectorSearch`] — a cosine-similarity store for tests and
//!   local development.
//!
//! Retrieved records are opaque [`RetrievedDocument`]s; only their
//! string rendering is consumed downstream.

pub mod astra;
pub mod document;
pub mod embedding;
pub mod error;
pub mod inmemory;
pub mod openai;
pub mod vectorstore;

pub use astra::AstraDbSearch;
pub use document::RetrievedDocument;
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use inmemory::InMemoryVectorSearch;
pub use openai::OpenAiEmbeddingProvider;
pub use vectorstore::VectorSearch;
