// SERP comparison — URL normalization and shared-result overlap scoring.

pub mod normalize;
pub mod overlap;

pub use normalize::normalize_url;
pub use overlap::{overlap_score, MAX_OVERLAP, SERP_TOP_N};
