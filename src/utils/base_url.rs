//! Base address extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the address short URLs are served from for this request.
///
/// Combines the scheme from `X-Forwarded-Proto` (first value; `http` when
/// absent or not `http`/`https`) with the `Host` header, port included.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if:
/// - The `Host` header is missing
/// - The header value contains invalid UTF-8
/// - The host is empty or contains characters not allowed in an authority
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:8000".parse().unwrap());
///
/// assert_eq!(base_url_from_headers(&headers).unwrap(), "http://s.example.com:8000");
/// ```
pub fn base_url_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty()
        || host
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '@' | '?' | '#'))
    {
        return Err(AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host }),
        ));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{scheme}://{host}"))
}

/// Joins a base address and a short code into the full short URL.
pub fn short_url(base_url: &str, short_code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), short_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    fn headers_with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn test_base_url_simple() {
        let headers = headers_with_host("example.com");
        assert_eq!(base_url_from_headers(&headers).unwrap(), "http://example.com");
    }

    #[test]
    fn test_base_url_keeps_port() {
        let headers = headers_with_host("localhost:8000");
        assert_eq!(
            base_url_from_headers(&headers).unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_base_url_ipv6_with_port() {
        let headers = headers_with_host("[::1]:8080");
        assert_eq!(base_url_from_headers(&headers).unwrap(), "http://[::1]:8080");
    }

    #[test]
    fn test_base_url_forwarded_proto() {
        let mut headers = headers_with_host("s.example.com");
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("HTTPS, http"));

        assert_eq!(
            base_url_from_headers(&headers).unwrap(),
            "https://s.example.com"
        );
    }

    #[test]
    fn test_base_url_ignores_unknown_proto() {
        let mut headers = headers_with_host("s.example.com");
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        assert_eq!(
            base_url_from_headers(&headers).unwrap(),
            "http://s.example.com"
        );
    }

    #[test]
    fn test_base_url_missing_host_header() {
        let result = base_url_from_headers(&HeaderMap::new());
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn test_base_url_rejects_path_in_host() {
        let headers = headers_with_host("evil.com/phish");
        assert!(base_url_from_headers(&headers).is_err());
    }

    #[test]
    fn test_base_url_invalid_utf8() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);
            assert!(base_url_from_headers(&headers).is_err());
        }
    }

    #[test]
    fn test_short_url_joins_with_single_slash() {
        assert_eq!(
            short_url("http://localhost:8000/", "Xy12Ab"),
            "http://localhost:8000/Xy12Ab"
        );
        assert_eq!(
            short_url("https://s.example.com", "Xy12Ab"),
            "https://s.example.com/Xy12Ab"
        );
    }
}
