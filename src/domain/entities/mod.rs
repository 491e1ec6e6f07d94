//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlMapping`] - A stored (original URL, short code) pair
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewUrlMapping`] carries the insert input, the store assigns `id` and
//! `created_at`. Mappings are immutable once stored, so there is no patch type.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
