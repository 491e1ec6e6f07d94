//! SQLite implementation of the URL mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::domain::repositories::error::RepositoryResult;
use crate::infrastructure::persistence::db_error::map_sqlx_error;

/// SQLite repository for URL mappings.
///
/// Relies on the `UNIQUE` constraints of the `url_mappings` table to reject
/// duplicate URLs and codes atomically; each statement commits on its own.
#[derive(Debug, Clone)]
pub struct SqliteUrlMappingRepository {
    pool: SqlitePool,
}

impl SqliteUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(Debug, FromRow)]
struct UrlMappingRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(row: UrlMappingRow) -> Self {
        UrlMapping::new(row.id, row.original_url, row.short_code, row.created_at)
    }
}

#[async_trait]
impl UrlMappingRepository for SqliteUrlMappingRepository {
    async fn find_by_url(&self, original_url: &str) -> RepositoryResult<Option<UrlMapping>> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM url_mappings
            WHERE original_url = ?
            "#,
        )
        .bind(original_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_code(&self, short_code: &str) -> RepositoryResult<Option<UrlMapping>> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM url_mappings
            WHERE short_code = ?
            "#,
        )
        .bind(short_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(UrlMapping::from))
    }

    async fn code_exists(&self, short_code: &str) -> RepositoryResult<bool> {
        let exists = sqlx::query("SELECT 1 FROM url_mappings WHERE short_code = ? LIMIT 1")
            .bind(short_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .is_some();

        Ok(exists)
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> RepositoryResult<UrlMapping> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            INSERT INTO url_mappings (original_url, short_code, created_at)
            VALUES (?, ?, ?)
            RETURNING id, original_url, short_code, created_at
            "#,
        )
        .bind(new_mapping.original_url)
        .bind(new_mapping.short_code)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count)
    }
}
