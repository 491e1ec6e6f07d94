//! Short code assignment and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{RepositoryError, UniqueColumn, UrlMappingRepository};
use crate::error::AppError;
use crate::utils::base_url::short_url;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub short_code: String,
    pub short_url: String,
}

/// Service for assigning short codes to URLs and resolving them back.
///
/// Holds no state besides the repository handle: every call round-trips to
/// the store, and the store's unique constraints are the only
/// synchronization between concurrent callers. Existence checks made here
/// are a fast path; a rejected insert is always re-examined.
pub struct ShortenerService<R: UrlMappingRepository> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: UrlMappingRepository> ShortenerService<R> {
    /// Creates a new shortener service generating codes of `code_length` symbols.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Returns the short code and full short URL for `url`.
    ///
    /// `base_url` is the address the short URL is served from, such as
    /// `https://s.example.com`.
    ///
    /// # Errors
    ///
    /// See [`Self::shorten_url`].
    pub async fn shorten(
        &self,
        url: &str,
        custom_code: Option<&str>,
        base_url: &str,
    ) -> Result<ShortenedUrl, AppError> {
        let mapping = self.shorten_url(url, custom_code).await?;

        Ok(ShortenedUrl {
            short_url: short_url(base_url, &mapping.short_code),
            short_code: mapping.short_code,
        })
    }

    /// Registers `url` or returns its existing mapping.
    ///
    /// # Deduplication
    ///
    /// A URL that is already stored keeps its code, whether or not a
    /// `custom_code` is passed on this call. URLs are compared verbatim.
    ///
    /// # Code Assignment
    ///
    /// - A non-empty `custom_code` is validated and used as is; a taken code is
    ///   an error, never a reason to fall back to generation
    /// - Otherwise a random code is drawn, redrawing on every collision
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `url` is not an absolute HTTP(S) URL.
    /// Returns [`AppError::Validation`] if the custom code is malformed.
    /// Returns [`AppError::CodeAlreadyExists`] if the custom code is taken.
    /// Returns [`AppError::Internal`] on storage or entropy failures.
    pub async fn shorten_url(
        &self,
        url: &str,
        custom_code: Option<&str>,
    ) -> Result<UrlMapping, AppError> {
        validate_url(url).map_err(|e| {
            AppError::invalid_url(
                format!("Invalid URL: {e}"),
                json!({ "url": url, "reason": e.to_string() }),
            )
        })?;

        if let Some(existing) = self.repository.find_by_url(url).await? {
            debug!(short_code = %existing.short_code, "URL already shortened");
            return Ok(existing);
        }

        let mapping = match custom_code.filter(|code| !code.is_empty()) {
            Some(code) => self.insert_custom(url, code).await?,
            None => self.insert_generated(url).await?,
        };

        info!(id = mapping.id, short_code = %mapping.short_code, "Created URL mapping");
        Ok(mapping)
    }

    /// Looks up the original URL for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this exact code.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .map(|mapping| mapping.original_url)
            .ok_or_else(|| AppError::not_found(short_code))
    }

    /// Number of stored mappings.
    pub async fn mapping_count(&self) -> Result<i64, AppError> {
        Ok(self.repository.count().await?)
    }

    async fn insert_custom(&self, url: &str, code: &str) -> Result<UrlMapping, AppError> {
        validate_custom_code(code)?;

        if self.repository.code_exists(code).await? {
            return Err(AppError::code_already_exists(code));
        }

        match self.repository.insert(NewUrlMapping::new(url, code)).await {
            Ok(mapping) => Ok(mapping),
            Err(RepositoryError::UniqueViolation(column)) => {
                match self.concurrent_winner(url, column).await? {
                    Some(winner) => Ok(winner),
                    None => Err(AppError::code_already_exists(code)),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Draws random codes until one is stored. There is no attempt limit.
    async fn insert_generated(&self, url: &str) -> Result<UrlMapping, AppError> {
        loop {
            let code = generate_code(self.code_length)?;

            if self.repository.code_exists(&code).await? {
                debug!(short_code = %code, "Generated code collides, drawing again");
                continue;
            }

            match self.repository.insert(NewUrlMapping::new(url, &code)).await {
                Ok(mapping) => return Ok(mapping),
                Err(RepositoryError::UniqueViolation(column)) => {
                    if let Some(winner) = self.concurrent_winner(url, column).await? {
                        return Ok(winner);
                    }
                    debug!(short_code = %code, "Generated code taken concurrently, drawing again");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// After a rejected insert, returns the mapping a concurrent caller stored
    /// for the same URL, if any.
    ///
    /// The URL is re-read whichever column was reported: a row that clashes on
    /// both columns is reported by SQLite as a `short_code` violation.
    async fn concurrent_winner(
        &self,
        url: &str,
        column: UniqueColumn,
    ) -> Result<Option<UrlMapping>, AppError> {
        debug!(?column, "Insert rejected by unique constraint, re-reading URL");

        let winner = self.repository.find_by_url(url).await?;
        if let Some(ref mapping) = winner {
            warn!(
                short_code = %mapping.short_code,
                "Concurrent request stored this URL first, returning its code"
            );
        }

        Ok(winner)
    }
}
