//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and code assignment. Services consume repository traits and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Code assignment and resolution

pub mod services;
