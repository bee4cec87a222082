// URL normalization for SERP comparison.
//
// Google serves the same page as http/https, with and without www., and
// with or without a trailing slash depending on the crawl. Two keywords
// ranking the same page should count it as shared regardless of which
// variant each SERP snapshot recorded.

/// Normalize a result URL for overlap comparison.
///
/// Lowercases, strips a leading `http://` or `https://` scheme, strips a
/// leading `www.`, and strips one trailing slash.
pub fn normalize_url(url: &str) -> String {
    let mut url = url.trim().to_lowercase();

    if let Some(rest) = url.strip_prefix("https://") {
        url = rest.to_string();
    } else if let Some(rest) = url.strip_prefix("http://") {
        url = rest.to_string();
    }

    if let Some(rest) = url.strip_prefix("www.") {
        url = rest.to_string();
    }

    if let Some(rest) = url.strip_suffix('/') {
        url = rest.to_string();
    }

    url
}
