// OpenAI-compatible embeddings client.
//
// Sends the whole keyword batch in one POST to `{base_url}/embeddings` and
// maps the response back into input order. Auth failures (401/403) and
// rate limiting (429) surface as distinct error variants so the caller can
// decide between fixing credentials, backing off, or failing the run.
// Any upstream failure aborts the whole clustering run — there is no
// overlap-only fallback.
//
// API shape: https://platform.openai.com/docs/api-reference/embeddings

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClusteringError;
use crate::semantic::traits::SemanticProvider;

/// Default request timeout for the embeddings call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Embedding provider backed by an OpenAI-compatible `/embeddings` endpoint.
pub struct OpenAiEmbedder {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiEmbedder {
    /// Create an embedder for the given endpoint and model.
    ///
    /// The key is checked at call time, not here, so a `Disabled` run can
    /// construct its config without credentials.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClusteringError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClusteringError::Upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl SemanticProvider for OpenAiEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f64>>, ClusteringError> {
        // Fail fast on missing credentials — before any network I/O
        if self.api_key.is_empty() {
            return Err(ClusteringError::MissingApiKey);
        }

        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/embeddings", self.base_url);
        let request = EmbeddingsRequest {
            model: self.model.clone(),
            input: texts.to_vec(),
        };

        debug!(batch_size = texts.len(), model = %self.model, "Requesting embeddings");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClusteringError::Upstream(format!("embeddings request timed out: {e}"))
                } else {
                    ClusteringError::Upstream(format!("embeddings request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = format!("HTTP {status}: {body}");
            return Err(match status.as_u16() {
                401 | 403 => ClusteringError::AuthFailed(detail),
                429 => ClusteringError::RateLimited(detail),
                _ => ClusteringError::Upstream(detail),
            });
        }

        let body: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| ClusteringError::Upstream(format!("failed to parse embeddings response: {e}")))?;

        if body.data.len() != texts.len() {
            return Err(ClusteringError::EmbeddingShape {
                expected: texts.len(),
                got: body.data.len(),
            });
        }

        // The API tags each vector with its input index; reorder so the
        // output position matches the input position regardless of how the
        // endpoint ordered the array.
        let mut data = body.data;
        data.sort_by_key(|d| d.index);

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}

// --- Embeddings API request/response types ---

#[derive(Serialize)]
struct EmbeddingsRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f64>,
}
