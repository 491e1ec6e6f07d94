//! Utility functions for code generation, URL checks, and request handling.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Validation of submitted URLs
//! - [`base_url`] - Short URL base address from HTTP headers

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
