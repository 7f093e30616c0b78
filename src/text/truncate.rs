/// Marker appended to truncated strings; counts as one char
pub const ELLIPSIS: char = '…';

/// Truncate a string to `max_len` chars, ending in [`ELLIPSIS`] if cut
///
/// Lengths are counted in chars, so multi-byte text is never split inside a
/// code point. A `max_len` of 0 still yields the marker on its own.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let keep = max_len.saturating_sub(1);
    let end = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);

    let mut out = String::with_capacity(end + ELLIPSIS.len_utf8());
    out.push_str(&s[..end]);
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limit() {
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("def", 4), "def");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncates_long_strings() {
        assert_eq!(truncate("abc", 2), "a…");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn test_zero_length_keeps_marker() {
        assert_eq!(truncate("def", 0), "…");
    }

    #[test]
    fn test_one_length_is_only_marker() {
        assert_eq!(truncate("def", 1), "…");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 5 chars, 10 bytes
        assert_eq!(truncate("ÁgúMa", 5), "ÁgúMa");
        assert_eq!(truncate("ÁgúMaí", 4), "Ágú…");
        assert_eq!(truncate("日本語テキスト", 3), "日本…");
    }

    #[test]
    fn test_result_length_matches_budget() {
        let s = "The quick brown fox jumps over the lazy dog";
        for n in 1..s.len() {
            let out = truncate(s, n);
            assert_eq!(out.chars().count(), n);
            assert!(out.ends_with(ELLIPSIS));
        }
    }
}
