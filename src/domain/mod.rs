//! Domain layer containing business entities and repository contracts.
//!
//! This module holds the data model of the shortener and the storage
//! interface the application layer is written against. It has no
//! dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Uniqueness of URLs and short codes is enforced by the repository, never
//!   by in-process coordination
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
