// Keyword clustering — matrices, union-find merging, and cluster editing.

pub mod editor;
pub mod engine;
pub mod matrix;
pub mod types;
pub mod union_find;

pub use engine::{cluster_keywords, MAX_KEYWORDS};
pub use types::{
    Cluster, ClusterMember, ClusteringParams, ClusteringResult, Keyword, SemanticBackend,
    SerpResult,
};
