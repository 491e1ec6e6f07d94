//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `POST /shorten`         - Create or fetch the short URL for a long URL
/// - `GET  /health/status`   - Liveness probe
/// - `GET  /{short_code}`    - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health/status", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
}
