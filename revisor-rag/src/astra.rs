//! Astra DB Data API vector search client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::document::RetrievedDocument;
use crate::error::{RagError, Result};
use crate::vectorstore::VectorSearch;

/// A [`VectorSearch`] backed by the Astra DB Data API (JSON API).
///
/// Issues `find` commands with a `$vector` sort against
/// `{endpoint}/api/json/v1/{keyspace}/{collection}`, authenticated with
/// an application token. The collections themselves are provisioned and
/// populated out of band; this client only reads.
///
/// # Example
///
/// ```rust,ignore
/// use revisor_rag::{AstraDbSearch, VectorSearch};
///
/// let store = AstraDbSearch::from_env()?;
/// let docs = store.vector_search("CULTURA", &embedding, 10).await?;
/// ```
pub struct AstraDbSearch {
    client: reqwest::Client,
    endpoint: String,
    token: String,
    keyspace: String,
}

impl AstraDbSearch {
    /// Create a new client.
    ///
    /// `endpoint` is the database API endpoint
    /// (`https://<db-id>-<region>.apps.astra.datastax.com`), `token` the
    /// application token, `keyspace` the namespace holding the
    /// collections.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if any argument is empty.
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        keyspace: impl Into<String>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let token = token.into();
        let keyspace = keyspace.into();

        if endpoint.is_empty() || token.is_empty() || keyspace.is_empty() {
            return Err(RagError::ConfigError(
                "Astra DB endpoint, token, and keyspace must all be set".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
            keyspace,
        })
    }

    /// Create a new client from `ASTRA_DB_API_ENDPOINT`,
    /// `ASTRA_DB_APPLICATION_TOKEN`, and `ASTRA_DB_NAMESPACE`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| {
                RagError::ConfigError(format!("{name} environment variable not set"))
            })
        };
        Self::new(
            var("ASTRA_DB_API_ENDPOINT")?,
            var("ASTRA_DB_APPLICATION_TOKEN")?,
            var("ASTRA_DB_NAMESPACE")?,
        )
    }
}

// ── Data API request/response types ────────────────────────────────

#[derive(Serialize)]
struct FindCommand<'a> {
    find: Find<'a>,
}

#[derive(Serialize)]
struct Find<'a> {
    sort: VectorSort<'a>,
    options: FindOptions,
}

#[derive(Serialize)]
struct VectorSort<'a> {
    #[serde(rename = "$vector")]
    vector: &'a [f32],
}

#[derive(Serialize)]
struct FindOptions {
    limit: usize,
}

#[derive(Deserialize)]
struct FindResponse {
    #[serde(default)]
    data: Option<FindData>,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Deserialize)]
struct FindData {
    #[serde(default)]
    documents: Vec<Value>,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

// ── VectorSearch implementation ────────────────────────────────────

#[async_trait]
impl VectorSearch for AstraDbSearch {
    async fn vector_search(
        &self,
        collection: &str,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>> {
        debug!(backend = "AstraDB", collection, limit, "vector search");

        let url = format!("{}/api/json/v1/{}/{}", self.endpoint, self.keyspace, collection);
        let body = FindCommand {
            find: Find { sort: VectorSort { vector: embedding }, options: FindOptions { limit } },
        };

        let response = self
            .client
            .post(&url)
            .header("Token", &self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(backend = "AstraDB", error = %e, "request failed");
                RagError::VectorStoreError {
                    backend: "AstraDB".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!(backend = "AstraDB", %status, "API error");
            return Err(RagError::VectorStoreError {
                backend: "AstraDB".into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let parsed: FindResponse = response.json().await.map_err(|e| {
            error!(backend = "AstraDB", error = %e, "failed to parse response");
            RagError::VectorStoreError {
                backend: "AstraDB".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        if let Some(first) = parsed.errors.into_iter().next() {
            return Err(RagError::VectorStoreError {
                backend: "AstraDB".into(),
                message: first.message,
            });
        }

        let documents: Vec<RetrievedDocument> = parsed
            .data
            .map(|d| d.documents)
            .unwrap_or_default()
            .into_iter()
            .map(RetrievedDocument::from_value)
            .collect();

        info!(backend = "AstraDB", collection, count = documents.len(), "search completed");
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_command_serializes_vector_sort() {
        let embedding = vec![0.25f32, -0.5];
        let body = FindCommand {
            find: Find {
                sort: VectorSort { vector: &embedding },
                options: FindOptions { limit: 10 },
            },
        };
        let rendered = serde_json::to_value(&body).unwrap();
        assert_eq!(rendered["find"]["sort"]["$vector"][0], 0.25);
        assert_eq!(rendered["find"]["options"]["limit"], 10);
    }

    #[test]
    fn parses_documents_and_errors() {
        let raw = r#"{"data": {"documents": [{"titulo": "Soja"}, {"titulo": "Milho"}]}}"#;
        let parsed: FindResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data.unwrap().documents.len(), 2);

        let raw = r#"{"errors": [{"message": "collection not found", "errorCode": "NOT_FOUND"}]}"#;
        let parsed: FindResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.errors[0].message, "collection not found");
    }

    #[test]
    fn empty_config_is_rejected() {
        assert!(AstraDbSearch::new("", "token", "keyspace").is_err());
        assert!(AstraDbSearch::new("https://db.example", "", "keyspace").is_err());
    }
}
