//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::base_url_from_headers;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "custom_code": "MyLink"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "Xy12Ab",
///   "short_url": "http://localhost:8000/Xy12Ab"
/// }
/// ```
///
/// Shortening an already stored URL returns its existing code.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the URL or custom code is malformed.
/// Returns 400 Bad Request if the custom code is taken or the `Host` header
/// is unusable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let base_url = match &state.public_base_url {
        Some(base_url) => base_url.clone(),
        None => base_url_from_headers(&headers)?,
    };

    let shortened = state
        .shortener_service
        .shorten(&payload.url, payload.custom_code.as_deref(), &base_url)
        .await?;

    Ok(Json(ShortenResponse {
        short_code: shortened.short_code,
        short_url: shortened.short_url,
    }))
}
