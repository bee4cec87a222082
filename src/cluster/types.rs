// Domain types for keyword clustering.
//
// Everything here is plain serde-serializable data. A ClusteringResult is
// produced fresh per run and handed to the caller — storage and export are
// the caller's responsibility, so nothing in this module touches I/O.

use serde::{Deserialize, Serialize};

use crate::error::ClusteringError;

/// A single organic search result from a keyword's SERP snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerpResult {
    #[serde(default)]
    pub title: String,
    pub url: String,
}

/// A keyword to be clustered, with whatever SERP and metrics data the
/// caller has for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub id: String,
    pub text: String,
    /// Ordered top results for this keyword's query. May be empty when the
    /// SERP was never fetched — that keyword then scores 0 overlap against
    /// everything and can only stay unclustered (not an error).
    #[serde(default)]
    pub serp_results: Vec<SerpResult>,
    /// Monthly search volume. Absent ranks as zero.
    #[serde(default)]
    pub search_volume: Option<u64>,
    /// Keyword difficulty (0–100). Absent ranks as zero.
    #[serde(default)]
    pub difficulty: Option<f64>,
}

/// Which semantic similarity backend a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticBackend {
    /// SERP overlap only — no embeddings, no network calls.
    #[default]
    Disabled,
    /// Embedding-backed cosine distance as a second merge gate.
    Embedding,
}

/// Tunable knobs for a clustering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringParams {
    /// Minimum shared top-10 URLs (0–10) for two keywords to merge.
    pub overlap_threshold: u32,
    /// Maximum cosine distance (0–1) still considered similar. Only
    /// consulted when `semantic_backend` is enabled.
    pub distance_threshold: f64,
    /// Groups smaller than this are dropped whole into the unclustered
    /// list. Must be at least 1.
    pub min_cluster_size: usize,
    pub semantic_backend: SemanticBackend,
}

impl Default for ClusteringParams {
    fn default() -> Self {
        Self {
            overlap_threshold: 3,
            distance_threshold: 0.3,
            min_cluster_size: 2,
            semantic_backend: SemanticBackend::Disabled,
        }
    }
}

impl ClusteringParams {
    /// Reject out-of-range parameters before any computation begins.
    pub fn validate(&self) -> Result<(), ClusteringError> {
        if self.overlap_threshold > crate::serp::MAX_OVERLAP {
            return Err(ClusteringError::InvalidParams(format!(
                "overlap_threshold must be 0-10, got {}",
                self.overlap_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.distance_threshold) || self.distance_threshold.is_nan() {
            return Err(ClusteringError::InvalidParams(format!(
                "distance_threshold must be 0.0-1.0, got {}",
                self.distance_threshold
            )));
        }
        if self.min_cluster_size < 1 {
            return Err(ClusteringError::InvalidParams(
                "min_cluster_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One keyword's place in a cluster. SERP titles/URLs are copied in so a
/// cluster renders without going back to the keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterMember {
    pub keyword_id: String,
    pub text: String,
    #[serde(default)]
    pub search_volume: Option<u64>,
    #[serde(default)]
    pub serp_results: Vec<SerpResult>,
    pub is_representative: bool,
}

impl ClusterMember {
    /// Build a member from a keyword, denormalizing its SERP data.
    pub fn from_keyword(keyword: &Keyword, is_representative: bool) -> Self {
        Self {
            keyword_id: keyword.id.clone(),
            text: keyword.text.clone(),
            search_volume: keyword.search_volume,
            serp_results: keyword.serp_results.clone(),
            is_representative,
        }
    }
}

/// A topical group of keywords with exactly one representative member
/// (unless the cluster is empty, which editor splits may produce).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub members: Vec<ClusterMember>,
}

impl Cluster {
    /// The representative ("pillar") member, if the cluster has one.
    pub fn representative(&self) -> Option<&ClusterMember> {
        self.members.iter().find(|m| m.is_representative)
    }
}

/// The output of one clustering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringResult {
    pub clusters: Vec<Cluster>,
    /// The parameters the run was made with, echoed back for the caller.
    pub params: ClusteringParams,
    /// Keywords that didn't make it into any surviving cluster.
    pub unclustered: Vec<Keyword>,
}

/// Derive a URL-safe id slug from a display name.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// and trims hyphens at the ends. An all-symbol name slugs to "cluster".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "cluster".to_string()
    } else {
        slug
    }
}
