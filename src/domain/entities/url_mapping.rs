//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A stored mapping between an original URL and its short code.
///
/// Both `original_url` and `short_code` are unique across all mappings.
/// The URL is kept exactly as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for storing a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_code: String,
}

impl NewUrlMapping {
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}
