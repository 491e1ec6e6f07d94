//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Codes are matched exactly, case included. Every request goes to the store;
/// nothing is cached or counted.
///
/// # Errors
///
/// Returns 404 Not Found with message `Short URL not found` if the code is
/// unknown.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shortener_service.resolve(&short_code).await?;

    debug!(%short_code, "Redirecting");
    Ok(Redirect::temporary(&original_url))
}
