// Typed errors for the clustering core.
//
// The engine distinguishes configuration problems (caught before any
// network call), upstream embedding failures (auth vs. rate limit vs.
// everything else, so callers can decide whether a retry makes sense),
// and parameter validation. Retry policy belongs to the caller — nothing
// in the core retries or swallows these.

use thiserror::Error;

/// Errors surfaced by the clustering engine and the semantic provider.
#[derive(Debug, Error)]
pub enum ClusteringError {
    /// Malformed clustering parameters, rejected before any computation.
    #[error("Invalid clustering parameters: {0}")]
    InvalidParams(String),

    /// Embedding backend selected but no API key configured.
    #[error("Embeddings API key not set. Add OPENAI_API_KEY to your .env file.")]
    MissingApiKey,

    /// The embeddings endpoint rejected our credentials (HTTP 401/403).
    #[error("Embeddings API authentication failed: {0}")]
    AuthFailed(String),

    /// The embeddings endpoint is rate-limiting us (HTTP 429).
    #[error("Embeddings API rate limit exceeded: {0}")]
    RateLimited(String),

    /// Any other upstream failure: non-2xx status, transport error, timeout.
    #[error("Embeddings API error: {0}")]
    Upstream(String),

    /// The endpoint returned a different number of vectors than texts sent.
    #[error("Embedding response shape mismatch: sent {expected} texts, got {got} vectors")]
    EmbeddingShape { expected: usize, got: usize },
}
