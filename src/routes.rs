//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`        - Create a short URL
//! - `GET  /health/status`  - Liveness probe
//! - `GET  /{short_code}`   - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured allowed origins
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - CORS origins; `*` allows any origin
pub fn app_router(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
