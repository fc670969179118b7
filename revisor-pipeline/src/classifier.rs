//! Topical classification of draft documents.

use std::sync::Arc;

use tracing::{debug, info};

use revisor_model::{ModelError, TextModel};

use crate::error::ClassificationError;
use crate::label::Label;
use crate::prompts::classification_prompt;

/// Classifies a draft into one of the three topical buckets.
///
/// Sends the fixed taxonomy prompt to the injected model, upper-cases
/// the reply, and scans for the category keywords in priority order:
/// `PRODUTO` wins over `CULTURA`, which wins over `OUTROS`. Any reply
/// matching none of the three is an
/// [`Unrecognized`](ClassificationError::Unrecognized) error carrying
/// the raw reply.
pub struct Classifier {
    model: Arc<dyn TextModel>,
}

impl Classifier {
    /// Create a classifier backed by the given model.
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Classify a draft document.
    pub async fn classify(&self, text: &str) -> Result<Label, ClassificationError> {
        let prompt = classification_prompt(text);
        let reply = self.model.generate(&prompt).await.map_err(|e| match e {
            ModelError::Unavailable { message, .. } => ClassificationError::Unavailable(message),
            other => ClassificationError::Model(other),
        })?;

        let normalized = reply.trim().to_uppercase();
        debug!(reply = %normalized, "raw classification reply");

        match parse_label_reply(&normalized) {
            Some(label) => {
                info!(%label, "document classified");
                Ok(label)
            }
            None => Err(ClassificationError::Unrecognized { reply: normalized }),
        }
    }
}

/// Scan an upper-cased reply for the category keywords in priority
/// order. First match wins, so a reply containing several keywords
/// resolves to the highest-priority one.
fn parse_label_reply(normalized: &str) -> Option<Label> {
    Label::ALL.iter().copied().find(|label| normalized.contains(label.as_collection()))
}
