// Pairwise similarity matrices.
//
// Both matrices are symmetric, so only the upper triangle is computed and
// then mirrored. Cost is O(N²) in time and memory — that is the practical
// ceiling on keyword-list size for a single run.

use crate::cluster::types::Keyword;
use crate::semantic::traits::SemanticProvider;
use crate::serp::{overlap_score, MAX_OVERLAP};

/// Build the N×N SERP-overlap matrix.
///
/// Diagonal is pinned to [`MAX_OVERLAP`] — a keyword trivially shares its
/// whole SERP with itself.
pub fn overlap_matrix(keywords: &[Keyword]) -> Vec<Vec<u32>> {
    let n = keywords.len();
    let mut matrix = vec![vec![0u32; n]; n];

    for i in 0..n {
        matrix[i][i] = MAX_OVERLAP;
        for j in (i + 1)..n {
            let score = overlap_score(&keywords[i].serp_results, &keywords[j].serp_results);
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }

    matrix
}

/// Build the N×N semantic-distance matrix from per-keyword embeddings.
///
/// Diagonal is pinned to 0.0 — a keyword is identical to itself. Callers
/// only build this when the semantic backend is enabled.
pub fn semantic_matrix(embeddings: &[Vec<f64>], provider: &dyn SemanticProvider) -> Vec<Vec<f64>> {
    let n = embeddings.len();
    let mut matrix = vec![vec![0.0f64; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let dist = provider.distance(&embeddings[i], &embeddings[j]);
            matrix[i][j] = dist;
            matrix[j][i] = dist;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::types::SerpResult;
    use crate::semantic::DisabledProvider;

    struct CosineOnly;

    #[async_trait::async_trait]
    impl SemanticProvider for CosineOnly {
        async fn embed(
            &self,
            _texts: &[String],
        ) -> Result<Vec<Vec<f64>>, crate::error::ClusteringError> {
            unreachable!("matrix tests never embed")
        }
    }

    fn keyword(id: &str, urls: &[&str]) -> Keyword {
        Keyword {
            id: id.to_string(),
            text: id.to_string(),
            serp_results: urls
                .iter()
                .map(|u| SerpResult {
                    title: String::new(),
                    url: u.to_string(),
                })
                .collect(),
            search_volume: None,
            difficulty: None,
        }
    }

    #[test]
    fn overlap_diagonal_is_ten() {
        let keywords = vec![keyword("a", &["https://x.com/1"]), keyword("b", &[])];
        let matrix = overlap_matrix(&keywords);
        assert_eq!(matrix[0][0], 10);
        assert_eq!(matrix[1][1], 10);
    }

    #[test]
    fn overlap_matrix_is_symmetric() {
        let keywords = vec![
            keyword("a", &["https://x.com/1", "https://x.com/2"]),
            keyword("b", &["https://x.com/1"]),
            keyword("c", &["https://y.com/9"]),
        ];
        let matrix = overlap_matrix(&keywords);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix[i][j], matrix[j][i], "asymmetry at ({i},{j})");
            }
        }
        assert_eq!(matrix[0][1], 1);
        assert_eq!(matrix[0][2], 0);
    }

    #[test]
    fn semantic_diagonal_is_zero() {
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let matrix = semantic_matrix(&embeddings, &CosineOnly);
        assert_eq!(matrix[0][0], 0.0);
        assert_eq!(matrix[1][1], 0.0);
    }

    #[test]
    fn semantic_matrix_is_symmetric() {
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
        let matrix = semantic_matrix(&embeddings, &CosineOnly);
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (matrix[i][j] - matrix[j][i]).abs() < 1e-12,
                    "asymmetry at ({i},{j})"
                );
            }
        }
        assert!((matrix[0][1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn disabled_provider_distances_are_one_off_diagonal() {
        let embeddings = vec![Vec::new(), Vec::new()];
        let matrix = semantic_matrix(&embeddings, &DisabledProvider);
        assert_eq!(matrix[0][0], 0.0);
        assert_eq!(matrix[0][1], 1.0);
    }

    #[test]
    fn empty_input_yields_empty_matrices() {
        assert!(overlap_matrix(&[]).is_empty());
        assert!(semantic_matrix(&[], &CosineOnly).is_empty());
    }
}
