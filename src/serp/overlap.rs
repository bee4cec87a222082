// SERP overlap scoring — how many top-10 results two keywords share.
//
// Two keywords whose searches return mostly the same pages can be served
// by one piece of content. The score is the size of the set intersection
// of normalized result URLs, so it runs 0 (nothing shared) to 10 (every
// top-10 result shared).

use std::collections::HashSet;

use crate::cluster::types::SerpResult;
use crate::serp::normalize::normalize_url;

/// Maximum possible overlap score — a full shared top-10.
pub const MAX_OVERLAP: u32 = 10;

/// How many results per SERP are considered (top-10 convention).
pub const SERP_TOP_N: usize = 10;

/// Count the shared top-10 URLs between two SERPs after normalization.
///
/// Either side missing or empty scores 0. Self-comparison is not scored
/// here — the matrix builder pins the diagonal to [`MAX_OVERLAP`] by
/// convention.
pub fn overlap_score(a: &[SerpResult], b: &[SerpResult]) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let urls_a: HashSet<String> = a
        .iter()
        .take(SERP_TOP_N)
        .map(|r| normalize_url(&r.url))
        .collect();

    b.iter()
        .take(SERP_TOP_N)
        .map(|r| normalize_url(&r.url))
        .collect::<HashSet<String>>()
        .intersection(&urls_a)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serp(urls: &[&str]) -> Vec<SerpResult> {
        urls.iter()
            .map(|u| SerpResult {
                title: String::new(),
                url: u.to_string(),
            })
            .collect()
    }

    #[test]
    fn counts_shared_urls() {
        let a = serp(&[
            "https://a.com/1",
            "https://a.com/2",
            "https://a.com/3",
            "https://a.com/4",
        ]);
        let b = serp(&[
            "https://a.com/1",
            "https://a.com/2",
            "https://b.com/x",
            "https://b.com/y",
        ]);
        assert_eq!(overlap_score(&a, &b), 2);
    }

    #[test]
    fn empty_serp_scores_zero() {
        let a = serp(&["https://a.com/1"]);
        assert_eq!(overlap_score(&a, &[]), 0);
        assert_eq!(overlap_score(&[], &a), 0);
        assert_eq!(overlap_score(&[], &[]), 0);
    }

    #[test]
    fn normalization_variants_count_as_shared() {
        let a = serp(&["https://www.example.com/page/"]);
        let b = serp(&["http://example.com/page"]);
        assert_eq!(overlap_score(&a, &b), 1);
    }

    #[test]
    fn only_first_ten_results_considered() {
        // 12 results each; the only shared URL sits at position 11
        let mut urls_a: Vec<String> = (0..10).map(|i| format!("https://a.com/{i}")).collect();
        let mut urls_b: Vec<String> = (0..10).map(|i| format!("https://b.com/{i}")).collect();
        urls_a.push("https://shared.com/1".to_string());
        urls_a.push("https://shared.com/2".to_string());
        urls_b.push("https://shared.com/1".to_string());
        urls_b.push("https://shared.com/2".to_string());

        let a = serp(&urls_a.iter().map(String::as_str).collect::<Vec<_>>());
        let b = serp(&urls_b.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(overlap_score(&a, &b), 0);
    }

    #[test]
    fn duplicate_urls_count_once() {
        let a = serp(&["https://a.com/1", "https://a.com/1", "https://a.com/2"]);
        let b = serp(&["https://a.com/1", "https://a.com/2"]);
        assert_eq!(overlap_score(&a, &b), 2);
    }

    #[test]
    fn is_symmetric() {
        let a = serp(&["https://a.com/1", "https://a.com/2", "https://x.com/q"]);
        let b = serp(&["https://a.com/2", "https://y.com/r"]);
        assert_eq!(overlap_score(&a, &b), overlap_score(&b, &a));
    }

    #[test]
    fn identical_full_serps_score_ten() {
        let urls: Vec<String> = (0..10).map(|i| format!("https://a.com/{i}")).collect();
        let a = serp(&urls.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(overlap_score(&a, &a), 10);
    }
}
