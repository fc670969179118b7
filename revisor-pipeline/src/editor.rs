//! Incremental edits on already-revised text.

use std::sync::Arc;

use tracing::{info, warn};

use revisor_model::TextModel;

use crate::prompts::{incremental_prompt, ADJUSTMENTS_HEADING};

/// The outcome of an incremental edit.
///
/// The editor never fails: on a generation error it returns the input
/// unchanged with `fallback` set, so the caller keeps the prior revision
/// but can tell the instruction was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The resulting text.
    pub text: String,
    /// True when the model call failed and the input was returned
    /// unchanged.
    pub fallback: bool,
}

/// Applies one free-form instruction to previously revised text.
///
/// The change-log section from the revision pass is stripped before the
/// edit prompt is built, so the model never sees or echoes it. An empty
/// instruction is the identity operation — no model call is made.
pub struct Editor {
    model: Arc<dyn TextModel>,
}

impl Editor {
    /// Create an editor backed by the given model.
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Apply `instruction` to `revised_text`.
    ///
    /// `revised_text` may still carry the adjustments section (e.g. the
    /// raw reply of a revision pass); only the main text ahead of the
    /// heading is edited.
    pub async fn apply(&self, revised_text: &str, instruction: &str) -> EditOutcome {
        if instruction.trim().is_empty() {
            return EditOutcome { text: revised_text.to_string(), fallback: false };
        }

        let main_text = strip_change_log(revised_text);
        let prompt = incremental_prompt(main_text, instruction);

        match self.model.generate(&prompt).await {
            Ok(text) => {
                info!(text_len = text.len(), "incremental edit applied");
                EditOutcome { text, fallback: false }
            }
            Err(e) => {
                // Never lose the user's prior revision over a failed edit.
                warn!(error = %e, "incremental edit failed, returning input unchanged");
                EditOutcome { text: revised_text.to_string(), fallback: true }
            }
        }
    }
}

/// Return the main text ahead of the adjustments heading, trimmed.
fn strip_change_log(text: &str) -> &str {
    match text.split_once(ADJUSTMENTS_HEADING) {
        Some((main, _)) => main.trim(),
        None => text,
    }
}
