//! The opaque record type returned by vector search.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A document returned by a vector collection.
///
/// The backing collections hold heterogeneous records (product sheets,
/// crop-management passages, manual excerpts) with no shared schema, so
/// the fields are kept as an opaque JSON object. Downstream stages only
/// ever consume the [`Display`](fmt::Display) rendering, which is the
/// compact JSON form of the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RetrievedDocument {
    /// The raw key-value fields of the record.
    pub fields: Map<String, Value>,
}

impl RetrievedDocument {
    /// Create a document from raw fields.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Create a document from a JSON value.
    ///
    /// Non-object values are wrapped under a single `"value"` key so the
    /// record always renders as an object.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            other => {
                let mut fields = Map::new();
                fields.insert("value".to_string(), other);
                Self { fields }
            }
        }
    }
}

impl fmt::Display for RetrievedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.fields) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => f.write_str("{}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_as_compact_json() {
        let doc = RetrievedDocument::from_value(json!({
            "titulo": "Manejo de soja",
            "dose": 1.5
        }));
        let rendered = doc.to_string();
        assert!(rendered.contains("\"titulo\""));
        assert!(rendered.contains("Manejo de soja"));
    }

    #[test]
    fn wraps_non_object_values() {
        let doc = RetrievedDocument::from_value(json!("trecho solto"));
        assert_eq!(doc.fields.get("value"), Some(&json!("trecho solto")));
    }
}
