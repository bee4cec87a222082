// Semantic provider trait — the swap-ready abstraction.
//
// The cluster engine only ever talks to this trait, so a different
// embedding source can be wired in without touching the merge logic.
// Implementations must be async because the real provider is an HTTP API.

use async_trait::async_trait;

use crate::error::ClusteringError;
use crate::semantic::distance::cosine_distance;

/// Trait for turning keyword texts into embedding vectors and comparing them.
#[async_trait]
pub trait SemanticProvider: Send + Sync {
    /// Embed all texts in one batched outbound call.
    ///
    /// The returned vectors must match the input in both order and length.
    /// One request per run, never one per keyword — that bounds both
    /// latency and external-call cost.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f64>>, ClusteringError>;

    /// Distance between two embedding vectors, 0.0 (identical) to 2.0.
    ///
    /// Default is cosine distance with a conservative 1.0 for degenerate
    /// vectors. Providers only override this when their vector space calls
    /// for something else.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        cosine_distance(a, b)
    }
}
