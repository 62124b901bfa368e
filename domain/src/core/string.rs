//! String utilities for the domain layer.

/// Marker appended after a cut excerpt.
pub const ELLIPSIS: &str = "...";

/// Take the first `max_chars` characters of `s` and append [`ELLIPSIS`].
///
/// The cut counts `char`s, never bytes, so a multi-byte code point is
/// never split. No word-boundary adjustment is made, and the marker is
/// appended even when `s` is already short enough.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    let end = s
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    format!("{}{}", &s[..end], ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_ascii() {
        assert_eq!(excerpt("hello world", 5), "hello...");
        assert_eq!(excerpt("hello", 10), "hello...");
    }

    #[test]
    fn test_excerpt_exactly_limit() {
        let long = "a".repeat(250);
        let out = excerpt(&long, 200);
        assert_eq!(out, format!("{}...", "a".repeat(200)));
        assert_eq!(out.chars().count(), 203);
    }

    #[test]
    fn test_excerpt_cuts_mid_word() {
        assert_eq!(excerpt("photosynthesis", 5), "photo...");
    }

    #[test]
    fn test_excerpt_multibyte() {
        // Each character here is three bytes in UTF-8
        assert_eq!(excerpt("日本語テスト", 3), "日本語...");
        assert_eq!(excerpt("👋🌍🎉", 2), "👋🌍...");
    }

    #[test]
    fn test_excerpt_empty() {
        assert_eq!(excerpt("", 200), "...");
    }
}
