// The clustering run — threshold-gated union-find merging.
//
// A pair of keywords merges iff their SERP overlap meets the threshold
// AND, when the semantic backend is enabled, their embedding distance is
// within the distance threshold. The semantic signal can only veto, never
// rescue, a merge. Union-find accumulates the transitive closure, so A and
// C end up together whenever A-B and B-C merge even if A-C alone would not.
//
// Deterministic for a given (keywords, params, provider): group emission
// follows the smallest member index, and representative ties break toward
// the earliest input position.

use std::collections::HashMap;

use tracing::debug;

use crate::cluster::matrix::{overlap_matrix, semantic_matrix};
use crate::cluster::types::{
    slugify, Cluster, ClusterMember, ClusteringParams, ClusteringResult, Keyword, SemanticBackend,
};
use crate::cluster::union_find::UnionFind;
use crate::error::ClusteringError;
use crate::semantic::traits::SemanticProvider;

/// Hard cap on keyword-list size. Both matrices are O(N²) in memory and
/// the pairwise scan has no suspension point, so oversized inputs are
/// rejected up front instead of cancelled mid-computation.
pub const MAX_KEYWORDS: usize = 5_000;

/// Cluster a keyword list into topical groups.
///
/// The only I/O is the single batched `embed` call, and only when the
/// semantic backend is enabled — a disabled run never touches the provider.
/// All per-run state (matrices, union-find arrays) is built fresh here, so
/// concurrent runs are fully independent.
pub async fn cluster_keywords(
    keywords: &[Keyword],
    params: &ClusteringParams,
    provider: &dyn SemanticProvider,
) -> Result<ClusteringResult, ClusteringError> {
    params.validate()?;

    if keywords.len() > MAX_KEYWORDS {
        return Err(ClusteringError::InvalidParams(format!(
            "keyword list too large: {} keywords (maximum {MAX_KEYWORDS})",
            keywords.len()
        )));
    }

    let n = keywords.len();
    let overlap = overlap_matrix(keywords);

    let semantic = match params.semantic_backend {
        SemanticBackend::Disabled => None,
        SemanticBackend::Embedding => {
            let texts: Vec<String> = keywords.iter().map(|k| k.text.clone()).collect();
            let embeddings = provider.embed(&texts).await?;
            if embeddings.len() != n {
                return Err(ClusteringError::EmbeddingShape {
                    expected: n,
                    got: embeddings.len(),
                });
            }
            Some(semantic_matrix(&embeddings, provider))
        }
    };

    let mut uf = UnionFind::new(n);
    let mut merges = 0usize;

    for i in 0..n {
        for j in (i + 1)..n {
            if overlap[i][j] < params.overlap_threshold {
                continue;
            }
            if let Some(semantic) = &semantic {
                if semantic[i][j] > params.distance_threshold {
                    continue;
                }
            }
            uf.union(i, j);
            merges += 1;
        }
    }

    debug!(
        keywords = n,
        merges,
        semantic = ?params.semantic_backend,
        "Evaluated pairwise merges"
    );

    // Group indices by root, ordered by each group's smallest member index
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut group_of_root: HashMap<usize, usize> = HashMap::new();
    for i in 0..n {
        let root = uf.find(i);
        match group_of_root.get(&root) {
            Some(&g) => groups[g].push(i),
            None => {
                group_of_root.insert(root, groups.len());
                groups.push(vec![i]);
            }
        }
    }

    let mut clusters = Vec::new();
    let mut dropped: Vec<usize> = Vec::new();

    for group in groups {
        if group.len() < params.min_cluster_size {
            // Undersized groups are discarded whole, not trimmed
            dropped.extend(group);
            continue;
        }

        let rep_idx = volume_representative(&group, keywords);
        let name = keywords[rep_idx].text.clone();
        let id = format!("{}-{}", slugify(&name), clusters.len() + 1);
        let members = group
            .iter()
            .map(|&idx| ClusterMember::from_keyword(&keywords[idx], idx == rep_idx))
            .collect();

        clusters.push(Cluster { id, name, members });
    }

    dropped.sort_unstable();
    let unclustered: Vec<Keyword> = dropped.into_iter().map(|i| keywords[i].clone()).collect();

    debug!(
        clusters = clusters.len(),
        unclustered = unclustered.len(),
        "Clustering run complete"
    );

    Ok(ClusteringResult {
        clusters,
        params: params.clone(),
        unclustered,
    })
}

/// Pick a group's representative by search volume.
///
/// Highest volume wins (absent volume ranks as 0); ties break toward the
/// lowest original input index, so repeated runs over the same input order
/// pick the same keyword. The manual merge editor deliberately uses a
/// different rule (first member) — see `cluster::editor`.
fn volume_representative(group: &[usize], keywords: &[Keyword]) -> usize {
    let mut best = group[0];
    let mut best_volume = keywords[best].search_volume.unwrap_or(0);

    for &idx in &group[1..] {
        let volume = keywords[idx].search_volume.unwrap_or(0);
        // Strictly greater keeps the earliest index on ties; `group` is
        // already in ascending input order.
        if volume > best_volume {
            best = idx;
            best_volume = volume;
        }
    }

    best
}
