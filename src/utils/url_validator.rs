//! Validation of URLs submitted for shortening.
//!
//! URLs are checked but never rewritten: the stored value is byte-for-byte the
//! submitted string, so `https://x.com/a` and `https://x.com/a/` stay distinct.

use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2083;

/// Reasons a URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must be at most {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("URL must not contain leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule the input breaks.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/a").is_ok());
/// assert!(validate_url("example.com").is_err());       // Not absolute
/// assert!(validate_url("ftp://example.com").is_err()); // Unsupported scheme
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().count() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if input.trim() != input {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        assert!(validate_url("https://example.com/a").is_ok());
    }

    #[test]
    fn test_accepts_http_url_with_port_and_query() {
        assert!(validate_url("http://localhost:8000/path?b=2&a=1#frag").is_ok());
    }

    #[test]
    fn test_accepts_ip_hosts() {
        assert!(validate_url("http://192.168.1.1/").is_ok());
        assert!(validate_url("http://[::1]:8080/").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(validate_url("/just/a/path").is_err());
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        for input in [
            "ftp://example.com/file",
            "javascript:alert(1)",
            "mailto:user@example.com",
            "file:///etc/passwd",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::UnsupportedProtocol),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert_eq!(
            validate_url(" https://example.com"),
            Err(UrlValidationError::SurroundingWhitespace)
        );
        assert_eq!(
            validate_url("https://example.com\n"),
            Err(UrlValidationError::SurroundingWhitespace)
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(validate_url(&url), Err(UrlValidationError::TooLong));
    }

    #[test]
    fn test_accepts_max_length() {
        let prefix = "https://example.com/";
        let url = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert!(validate_url(&url).is_ok());
    }
}
