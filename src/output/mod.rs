// Output formatting — terminal display of clustering results.

pub mod terminal;

/// Shorten keyword text to fit a fixed-width table cell.
///
/// Cuts after `max_chars` characters (never mid-codepoint, so accented
/// keywords can't panic a byte slice) and appends "..." when anything
/// was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}
