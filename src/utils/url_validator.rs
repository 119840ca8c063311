//! Target URL validation.
//!
//! A target is accepted only if it is an absolute `http` or `https` URL with a
//! non-empty host, written out with an explicit `://` authority separator.

use std::borrow::Cow;

use url::Url;
use validator::ValidationError;

/// Message attached to every rejected URL.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL format";

/// Returns `true` if `candidate` is a well-formed absolute http(s) URL.
///
/// # Rules
///
/// 1. No whitespace or control characters anywhere in the string
/// 2. Parses as an absolute URL
/// 3. Scheme is `http` or `https` (case-insensitive)
/// 4. Scheme is followed by `://` and a non-empty authority
/// 5. Host is present and non-empty
///
/// The `url` crate silently repairs inputs like `http:/example.com` or
/// `https:///path`; rule 4 rejects them instead.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/a"));
/// assert!(!is_valid_url("ftp:/bad"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url(""));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty()
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let Ok(url) = Url::parse(candidate) else {
        return false;
    };

    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return false;
    }

    let Some(authority) = candidate
        .get(scheme.len()..)
        .and_then(|rest| rest.strip_prefix("://"))
    else {
        return false;
    };
    if authority.is_empty() || authority.starts_with(['/', '?', '#']) {
        return false;
    }

    url.host_str().is_some_and(|host| !host.is_empty())
}

/// `validator` adapter around [`is_valid_url`] for `#[validate(custom(...))]`.
pub fn validate_http_url(candidate: &str) -> Result<(), ValidationError> {
    if is_valid_url(candidate) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed(INVALID_URL_MESSAGE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("https://example.com/a"));
    }

    #[test]
    fn test_accepts_http_with_port_query_and_fragment() {
        assert!(is_valid_url("http://localhost:8080/path?q=1#top"));
    }

    #[test]
    fn test_accepts_uppercase_scheme_and_host() {
        assert!(is_valid_url("HTTPS://EXAMPLE.COM/Path"));
    }

    #[test]
    fn test_accepts_ip_hosts() {
        assert!(is_valid_url("http://127.0.0.1/"));
        assert!(is_valid_url("http://[::1]:3000/"));
    }

    #[test]
    fn test_accepts_long_url() {
        let url = format!("https://www.example.com/{}", "segment/".repeat(500));
        assert!(is_valid_url(&url));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        assert!(!is_valid_url("ftp:/bad"));
        assert!(!is_valid_url("ftp://example.com/file"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("mailto:user@example.com"));
    }

    #[test]
    fn test_rejects_missing_authority_separator() {
        assert!(!is_valid_url("http:/example.com"));
        assert!(!is_valid_url("https:example.com"));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("https:///path"));
    }

    #[test]
    fn test_rejects_relative_paths() {
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("example.com/path"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_url(" https://example.com"));
        assert!(!is_valid_url("https://example.com/a b"));
        assert!(!is_valid_url("https://example.com/\n"));
    }

    #[test]
    fn test_validate_http_url_message() {
        assert!(validate_http_url("https://example.com").is_ok());

        let err = validate_http_url("nope").unwrap_err();
        assert_eq!(err.message.as_deref(), Some(INVALID_URL_MESSAGE));
    }
}
