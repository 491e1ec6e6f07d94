//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    ///
    /// The length bound mirrors [`crate::utils::url_validator::MAX_URL_LENGTH`].
    #[validate(length(min = 1, max = 2083))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code. Format rules are enforced by the service.
    #[serde(default)]
    pub custom_code: Option<String>,
}

/// Response for a shortened URL.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}
