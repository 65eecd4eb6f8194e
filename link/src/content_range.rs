//! `Content-Range` parsing.
//!
//! With `Prefer: count=exact` the backend reports the total number of
//! matching rows after the slash: `0-19/97`, `*/97` for a bodyless count,
//! or `*/*` when the count is unavailable.

/// Extract the total row count from a `Content-Range` header value.
pub fn parse_total_count(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    let total = total.trim();
    if total == "*" {
        return None;
    }
    total.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_with_total() {
        assert_eq!(parse_total_count("0-19/97"), Some(97));
        assert_eq!(parse_total_count("20-39/97"), Some(97));
    }

    #[test]
    fn test_unit_prefix() {
        assert_eq!(parse_total_count("items 0-19/97"), Some(97));
    }

    #[test]
    fn test_wildcard_range() {
        assert_eq!(parse_total_count("*/42"), Some(42));
    }

    #[test]
    fn test_unknown_total() {
        assert_eq!(parse_total_count("*/*"), None);
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_total_count(""), None);
        assert_eq!(parse_total_count("0-19"), None);
        assert_eq!(parse_total_count("0-19/abc"), None);
    }
}
