//! # revisor-pipeline
//!
//! The agronomic text-revision pipeline.
//!
//! Given a draft document, the pipeline:
//!
//! 1. classifies it into one of three topical buckets
//!    ([`Label`]: `PRODUTO`, `CULTURA`, `OUTROS`) — or accepts an
//!    explicit override and skips classification;
//! 2. embeds a prefix of the draft and retrieves nearest reference
//!    passages from the bucket's vector collection;
//! 3. sanitizes the passages into a grounding-context block;
//! 4. asks a language model for a grounded rewrite, returning the
//!    revised text and its change log as a structured
//!    [`RevisionResult`];
//! 5. optionally applies one more free-form instruction to the revised
//!    text via the [`Editor`].
//!
//! All collaborators are injected as trait objects
//! ([`TextModel`](revisor_model::TextModel),
//! [`EmbeddingProvider`](revisor_rag::EmbeddingProvider),
//! [`VectorSearch`](revisor_rag::VectorSearch)), so tests run against
//! stubs and no client is ever a process-wide singleton.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use revisor_pipeline::{Revisor, RevisorConfig};
//!
//! let revisor = Revisor::builder()
//!     .classifier_model(Arc::new(gemini))
//!     .generator(Arc::new(openai_chat))
//!     .embedder(Arc::new(openai_embeddings))
//!     .store(Arc::new(astra))
//!     .build()?;
//!
//! let result = revisor.revise("Manejo de soja em lavouras do Cerrado", None).await?;
//! println!("{}", result.revised_text);
//! ```

pub mod classifier;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod label;
pub mod prompts;
pub mod reviser;

pub use classifier::Classifier;
pub use config::RevisorConfig;
pub use context::build_context;
pub use editor::{EditOutcome, Editor};
pub use error::{ClassificationError, RevisionError};
pub use label::Label;
pub use reviser::{RevisionResult, Revisor};
