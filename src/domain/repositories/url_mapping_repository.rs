//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::error::RepositoryResult;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Every lookup is an exact string match: no URL canonicalization and no
/// case folding of short codes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Finds the mapping for an original URL.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    async fn find_by_url(&self, original_url: &str) -> RepositoryResult<Option<UrlMapping>>;

    /// Finds the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    async fn find_by_code(&self, short_code: &str) -> RepositoryResult<Option<UrlMapping>>;

    /// Checks whether a short code is already taken.
    ///
    /// The answer is advisory: a concurrent insert may take the code right
    /// after this returns `false`.
    async fn code_exists(&self, short_code: &str) -> RepositoryResult<bool>;

    /// Stores a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UniqueViolation`](crate::domain::repositories::RepositoryError::UniqueViolation)
    /// if the URL or the short code already exists at the moment of insert.
    async fn insert(&self, new_mapping: NewUrlMapping) -> RepositoryResult<UrlMapping>;

    /// Counts stored mappings.
    async fn count(&self) -> RepositoryResult<i64>;
}
