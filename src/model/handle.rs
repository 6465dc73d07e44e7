// Fri Oct 16 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

pub const PROFILE_URL_TEMPLATE: &str = "https://x.com/{handle}";

static HANDLE_IN_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|/)x\.com/([^/?#]+)").unwrap());

static VALID_HANDLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{1,15}$").unwrap());

/// Whether `handle` fits the platform's handle charset and length.
pub fn is_valid_handle(handle: &str) -> bool {
    VALID_HANDLE.is_match(handle)
}

/// Whether `raw` should be read as a URL rather than a bare handle.
pub fn looks_like_url(raw: &str) -> bool {
    raw.contains("://") || raw.contains('/')
}

pub fn normalize_handle(raw: &str) -> String {
    raw.trim().trim_start_matches('@').trim().to_string()
}

/// Expands a `{handle}` template into a profile URL.
pub fn profile_url(template: &str, handle: &str) -> String {
    template.replace("{handle}", handle)
}

pub fn followers_url(account: &str) -> String {
    format!("https://x.com/{}/followers", normalize_handle(account))
}

/// Pulls the account segment following `x.com/` out of a URL.
/// Falls back to `"unknown"` when there is none.
pub fn extract_handle_from_url(url: &str) -> String {
    HANDLE_IN_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_handle_from_url() {
        assert_eq!(extract_handle_from_url("https://x.com/prathamdby/followers"), "prathamdby");
        assert_eq!(extract_handle_from_url("x.com/someone"), "someone");
        assert_eq!(extract_handle_from_url("https://example.com/a/b"), "unknown");
        assert_eq!(extract_handle_from_url("https://x.com/"), "unknown");
    }

    #[test]
    fn test_handle_charset() {
        assert!(is_valid_handle("prathamdby"));
        assert!(is_valid_handle("a_b_1"));
        assert!(!is_valid_handle(""));
        assert!(!is_valid_handle("unknown.user"));
        assert!(!is_valid_handle("way_too_long_handle_x"));
        assert!(looks_like_url("https://example.com/bob"));
        assert!(!looks_like_url("bob"));
    }

    #[test]
    fn test_profile_url_template() {
        assert_eq!(profile_url(PROFILE_URL_TEMPLATE, "alice"), "https://x.com/alice");
        assert_eq!(followers_url("@alice"), "https://x.com/alice/followers");
    }
}
