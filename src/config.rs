use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::semantic::openai::{OpenAiEmbedder, DEFAULT_TIMEOUT_SECS};

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_EMBEDDINGS_URL: &str = "https://api.openai.com/v1";

/// Default embedding model.
pub const DEFAULT_EMBEDDINGS_MODEL: &str = "text-embedding-3-small";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// API key for the embeddings endpoint — only needed for semantic runs.
    pub embeddings_api_key: String,
    /// OpenAI-compatible API base URL (defaults to https://api.openai.com/v1).
    pub embeddings_url: String,
    /// Embedding model identifier.
    pub embeddings_model: String,
    /// Request timeout for the batched embeddings call, in seconds.
    pub embeddings_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the API key, which is only checked
    /// when a semantic run actually needs it.
    pub fn load() -> Result<Self> {
        let embeddings_timeout_secs = match env::var("PILLAR_EMBEDDINGS_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("PILLAR_EMBEDDINGS_TIMEOUT_SECS must be a number, got: {raw}")
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            embeddings_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            embeddings_url: env::var("PILLAR_EMBEDDINGS_URL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDINGS_URL.to_string()),
            embeddings_model: env::var("PILLAR_EMBEDDINGS_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDINGS_MODEL.to_string()),
            embeddings_timeout_secs,
        })
    }

    /// Check that the embeddings API key is configured.
    /// Call this before any run with the semantic backend enabled.
    pub fn require_embeddings(&self) -> Result<()> {
        if self.embeddings_api_key.is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file,\n\
                 or run without --semantic for overlap-only clustering."
            );
        }
        Ok(())
    }

    /// Build the embedding provider from this configuration.
    pub fn embedder(&self) -> Result<OpenAiEmbedder> {
        let embedder = OpenAiEmbedder::new(
            self.embeddings_url.clone(),
            self.embeddings_model.clone(),
            self.embeddings_api_key.clone(),
            Duration::from_secs(self.embeddings_timeout_secs),
        )?;
        Ok(embedder)
    }
}
