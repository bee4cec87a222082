// No-op provider for overlap-only clustering.
//
// When the semantic backend is disabled the engine never consults the
// provider at all — it skips the semantic matrix entirely. The behavior
// here is a safety default for any code path that calls it anyway: empty
// vectors and a flat 1.0 distance, which can never pass a distance gate.

use async_trait::async_trait;

use crate::error::ClusteringError;
use crate::semantic::traits::SemanticProvider;

/// Provider used when clustering runs on SERP overlap alone.
pub struct DisabledProvider;

#[async_trait]
impl SemanticProvider for DisabledProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f64>>, ClusteringError> {
        Ok(vec![Vec::new(); texts.len()])
    }

    fn distance(&self, _a: &[f64], _b: &[f64]) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embed_returns_one_empty_vector_per_text() {
        let provider = DisabledProvider;
        let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let vectors = provider.embed(&texts).await.unwrap();
        assert_eq!(vectors.len(), 3);
        assert!(vectors.iter().all(|v| v.is_empty()));
    }

    #[tokio::test]
    async fn embed_empty_input_returns_empty() {
        let provider = DisabledProvider;
        assert!(provider.embed(&[]).await.unwrap().is_empty());
    }

    #[test]
    fn distance_is_always_one() {
        let provider = DisabledProvider;
        assert_eq!(provider.distance(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
        assert_eq!(provider.distance(&[], &[]), 1.0);
    }
}
