//! Common display utilities and helpers

use chrono::{DateTime, Utc};

/// Placeholder for absent values in tables
pub const NONE_PLACEHOLDER: &str = "--";

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Optional string or placeholder
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NONE_PLACEHOLDER.to_string(),
    }
}

/// Format timestamp as `YYYY-MM-DD HH:MM` UTC, or placeholder
pub fn format_datetime(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| NONE_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a long description", 10), "a long ...");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some("acme")), "acme");
        assert_eq!(or_placeholder(Some("")), "--");
        assert_eq!(or_placeholder(None), "--");
    }

    #[test]
    fn test_format_datetime() {
        let dt: DateTime<Utc> = "2024-03-01T10:05:00Z".parse().unwrap();
        assert_eq!(format_datetime(Some(&dt)), "2024-03-01 10:05");
        assert_eq!(format_datetime(None), "--");
    }
}
