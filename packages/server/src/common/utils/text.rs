/// Truncate a string to at most `max_chars` characters (not bytes).
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// First `max_bytes` bytes of `s`, cut back to a character boundary.
/// Used for log previews.
pub fn preview(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_is_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_chars("hello world", 5), "hello");

        let text = "é".repeat(150);
        let truncated = truncate_chars(&text, 100);
        assert_eq!(truncated.chars().count(), 100);
    }

    #[test]
    fn preview_respects_char_boundary() {
        let text = "Hello 世界";
        let p = preview(text, 8);
        assert!(p.len() <= 8);
        assert!(text.starts_with(p));
    }
}
