//! Grounding-context construction from retrieved documents.

use revisor_rag::RetrievedDocument;

use crate::prompts::{CONTEXT_HEADER, NO_CONTEXT_MARKER};

/// Build the grounding-context block for the rewrite prompt.
///
/// With no documents, returns the fixed no-results marker. Otherwise
/// each document is rendered to its string form, stripped of braces and
/// quote characters, truncated to `max_doc_chars` characters, and
/// emitted under a numbered `--- Fonte i ---` header.
///
/// The sanitization is deliberately lossy: the goal is compact,
/// escaping-free prose for the prompt, not data fidelity. Truncation
/// counts `char`s, so multi-byte text is never split mid-sequence.
pub fn build_context(documents: &[RetrievedDocument], max_doc_chars: usize) -> String {
    if documents.is_empty() {
        return NO_CONTEXT_MARKER.to_string();
    }

    let mut context = String::from(CONTEXT_HEADER);
    context.push('\n');
    for (i, doc) in documents.iter().enumerate() {
        let sanitized = sanitize(&doc.to_string(), max_doc_chars);
        context.push_str(&format!("--- Fonte {} ---\n{}...\n", i + 1, sanitized));
    }
    context
}

/// Strip structural punctuation and truncate to `max_chars` characters.
fn sanitize(text: &str, max_chars: usize) -> String {
    text.chars().filter(|c| !matches!(c, '{' | '}' | '\'' | '"')).take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sanitize_strips_braces_and_quotes() {
        assert_eq!(sanitize(r#"{"dose": '1,5 L/ha'}"#, 100), "dose: 1,5 L/ha");
    }

    #[test]
    fn sanitize_truncates_by_chars_not_bytes() {
        // Accented characters are multi-byte; truncation must still
        // produce valid UTF-8 of the requested length.
        let text = "aplicação".repeat(100);
        let truncated = sanitize(&text, 10);
        assert_eq!(truncated.chars().count(), 10);
    }

    #[test]
    fn empty_input_yields_no_results_marker() {
        assert_eq!(build_context(&[], 500), NO_CONTEXT_MARKER);
    }

    #[test]
    fn long_documents_are_capped_per_source() {
        let doc = RetrievedDocument::from_value(json!({"conteudo": "x".repeat(2000)}));
        let context = build_context(&[doc], 500);
        let body = context
            .split("--- Fonte 1 ---\n")
            .nth(1)
            .unwrap()
            .trim_end_matches("...\n");
        assert!(body.chars().count() <= 500);
    }

    #[test]
    fn numbered_source_headers() {
        let docs = vec![
            RetrievedDocument::from_value(json!({"titulo": "Soja"})),
            RetrievedDocument::from_value(json!({"titulo": "Milho"})),
        ];
        let context = build_context(&docs, 500);
        assert!(context.starts_with(CONTEXT_HEADER));
        assert!(context.contains("--- Fonte 1 ---"));
        assert!(context.contains("--- Fonte 2 ---"));
        assert!(!context.contains("--- Fonte 3 ---"));
        assert!(!context.contains('{'));
        assert!(!context.contains('"'));
    }
}
