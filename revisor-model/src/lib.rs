//! # revisor-model
//!
//! LLM client integrations for the agronomic text revisor.
//!
//! Everything the pipeline needs from a language model is a single-shot
//! prompt-in, text-out call, expressed by the [`TextModel`] trait. Two
//! providers implement it:
//!
//! - [`GeminiModel`] — Google's `generateContent` API, used for
//!   classification-style completions.
//! - [`OpenAiChatModel`] — OpenAI chat completions with a fixed system
//!   role, used for the revision and incremental-edit passes.
//!
//! [`MockModel`] provides canned replies and prompt recording for tests.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use revisor_model::{GeminiModel, TextModel};
//!
//! let model = GeminiModel::from_env()?;
//! let reply = model.generate("Classifique o texto ...").await?;
//! ```

pub mod error;
pub mod gemini;
pub mod mock;
pub mod model;
pub mod openai;

pub use error::ModelError;
pub use gemini::GeminiModel;
pub use mock::MockModel;
pub use model::TextModel;
pub use openai::OpenAiChatModel;
