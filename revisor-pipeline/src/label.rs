//! The three topical buckets and their collection names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A topical bucket used to select a retrieval collection.
///
/// The wire strings (`PRODUTO`, `CULTURA`, `OUTROS`) double as the
/// vector-collection names, so [`Label::as_collection`] is what reaches
/// the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Commercial products and services for agricultural use.
    Product,
    /// A specific agricultural crop (soy, corn, coffee, ...).
    Crop,
    /// Technical manuals, scientific publications, guides, norms.
    Other,
}

impl Label {
    /// The collection name for this bucket.
    pub fn as_collection(&self) -> &'static str {
        match self {
            Label::Product => "PRODUTO",
            Label::Crop => "CULTURA",
            Label::Other => "OUTROS",
        }
    }

    /// All labels, in classification priority order.
    pub const ALL: [Label; 3] = [Label::Product, Label::Crop, Label::Other];
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_collection())
    }
}

/// Error returned when parsing an unknown label string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError(pub String);

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label: {}", self.0)
    }
}

impl std::error::Error for ParseLabelError {}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PRODUTO" => Ok(Label::Product),
            "CULTURA" => Ok(Label::Crop),
            "OUTROS" => Ok(Label::Other),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}
