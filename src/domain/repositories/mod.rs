//! Repository trait definitions for the domain layer.
//!
//! This module defines the storage interface that the shortening service is
//! written against, following the Repository pattern. Implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`UrlMappingRepository`] - Lookup and insert of URL mappings
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! See integration tests in `tests/repository_url_mapping.rs` for the SQLite
//! implementation.

pub mod error;
pub mod url_mapping_repository;

pub use error::{RepositoryError, UniqueColumn};
pub use url_mapping_repository::UrlMappingRepository;

#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
