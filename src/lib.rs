//! # Shortlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The URL mapping entity and repository trait
//! - **Application Layer** ([`application`]) - Code assignment and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - Every short code maps to exactly one URL, and every URL to one code
//! - Shortening a stored URL again returns its existing code
//! - Uniqueness is enforced by the database's unique constraints, so
//!   concurrent requests for the same URL converge on a single code
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db?mode=rwc"
//! cargo run
//!
//! curl -X POST localhost:8000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenedUrl, ShortenerService};
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::{RepositoryError, UniqueColumn, UrlMappingRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
