//! Format - Display Helpers for Cells and Labels

use chrono::{DateTime, Local, Utc};

/// Render a UTC timestamp in the viewer's timezone, e.g. "Jan 12, 2026 14:30"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%b %-d, %Y %H:%M")
        .to_string()
}

/// Shorten a string to at most `max_len` characters, ellipsis included
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let head: String = s.chars().take(max_len - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }

    #[test]
    fn truncate_tiny_limit_hard_cuts() {
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
