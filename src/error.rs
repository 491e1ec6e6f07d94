//! Application error type and its HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::RepositoryError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced to callers of the shortening service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    BadRequest { message: String, details: Value },

    #[error("Short code already exists")]
    CodeAlreadyExists { code: String },

    #[error("Short URL not found")]
    NotFound { code: String },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }

    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn code_already_exists(code: impl Into<String>) -> Self {
        Self::CodeAlreadyExists { code: code.into() }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } | AppError::Validation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest { .. } | AppError::CodeAlreadyExists { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let message = self.to_string();

        let (code, details) = match self {
            AppError::InvalidUrl { details, .. } | AppError::Validation { details, .. } => {
                ("validation_error", details.clone())
            }
            AppError::BadRequest { details, .. } => ("bad_request", details.clone()),
            AppError::CodeAlreadyExists { code } => {
                ("code_already_exists", json!({ "short_code": code }))
            }
            AppError::NotFound { code } => ("not_found", json!({ "short_code": code })),
            AppError::Internal { details, .. } => ("internal_error", details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_default();
        AppError::validation("Request validation failed", details)
    }
}

/// Storage failures that reach this point are not part of the caller's
/// contract; unique violations are resolved by the service before this.
impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(error = %err, "Repository operation failed");
        AppError::internal("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::UniqueColumn;

    #[test]
    fn test_code_already_exists_is_bad_request() {
        let err = AppError::code_already_exists("taken1");

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Short code already exists");

        let info = err.to_error_info();
        assert_eq!(info.code, "code_already_exists");
        assert_eq!(info.details["short_code"], "taken1");
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("nope42");

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Short URL not found");
        assert_eq!(err.to_error_info().code, "not_found");
    }

    #[test]
    fn test_invalid_url_is_validation_error() {
        let err = AppError::invalid_url("Invalid URL", json!({ "url": "nope" }));

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_error_info().code, "validation_error");
    }

    #[test]
    fn test_repository_error_hides_details() {
        let err: AppError = RepositoryError::Query("syntax error near SELECT".to_string()).into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let info = err.to_error_info();
        assert_eq!(info.message, "Database error");
        assert!(!info.details.to_string().contains("syntax"));

        let err: AppError = RepositoryError::UniqueViolation(UniqueColumn::Unknown).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
