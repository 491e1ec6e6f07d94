#![allow(dead_code)]

use shortlink::application::services::ShortenerService;
use shortlink::infrastructure::persistence::{MIGRATOR, SqliteUrlMappingRepository};
use shortlink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// In-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

/// File database in a temporary directory, served by several connections so
/// that concurrent callers really interleave their statements.
///
/// The returned `TempDir` removes the database when dropped.
pub async fn shared_test_pool(max_connections: u32) -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("urls.db"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    (pool, dir)
}

pub fn create_test_service(pool: SqlitePool) -> ShortenerService<SqliteUrlMappingRepository> {
    ShortenerService::new(Arc::new(SqliteUrlMappingRepository::new(pool)), 6)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_test_service(pool)), None)
}

pub async fn create_test_mapping(pool: &SqlitePool, url: &str, code: &str) {
    sqlx::query("INSERT INTO url_mappings (original_url, short_code) VALUES (?, ?)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows_for_url(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings WHERE original_url = ?")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
