//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteUrlMappingRepository`] - URL mapping storage and retrieval

pub mod db_error;
pub mod sqlite_url_mapping_repository;

pub use sqlite_url_mapping_repository::SqliteUrlMappingRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a SQLite connection pool, creating the database file if missing.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the first connection fails.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect_with(options)
        .await
}
