//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes. Both use the same 62-symbol alphabet.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Symbols a short code is made of: ASCII letters and digits.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated codes (62^6 ≈ 5.6e10 codes).
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest configurable length for generated codes.
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest accepted code, generated or custom.
pub const MAX_CODE_LENGTH: usize = 32;

/// Random bytes at or above this value are discarded so that `byte % 62`
/// stays uniform (248 = 4 * 62).
const REJECTION_THRESHOLD: u8 = 248;

/// Codes that would shadow fixed routes.
const RESERVED_CODES: &[&str] = &["shorten", "health"];

static CUSTOM_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Generates a random short code of `length` alphanumeric symbols.
///
/// Entropy comes from the operating system CSPRNG via `getrandom`, and
/// rejection sampling keeps every symbol equally likely, so codes cannot be
/// predicted from earlier codes or request timing.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6)?;
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> Result<String, AppError> {
    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer).map_err(|e| {
            AppError::internal(
                "Failed to generate short code",
                json!({ "reason": e.to_string() }),
            )
        })?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_THRESHOLD) {
            code.push(char::from(ALPHABET[usize::from(byte % 62)]));
            if code.len() == length {
                break;
            }
        }
    }

    Ok(code)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-32 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any validation rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_custom_code("MyLink2024").is_ok());
/// assert!(validate_custom_code("abc").is_ok());
/// assert!(validate_custom_code("my-link").is_err());   // Hyphen
/// assert!(validate_custom_code("shorten").is_err());   // Reserved
/// ```
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::validation(
            format!("Custom code must be 1-{MAX_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::validation(
            "Custom code can only contain letters and digits",
            json!({ "custom_code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::validation(
            "This code is reserved",
            json!({ "custom_code": code }),
        ));
    }

    Ok(())
}
