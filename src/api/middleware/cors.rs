//! Cross-origin resource sharing middleware.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the CORS layer for the configured origins.
///
/// A `*` entry allows any origin without credentials. Otherwise only the
/// listed origins are allowed, with credentials. Entries that are not valid
/// header values are skipped.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(cors::layer(&["https://app.example.com".to_string()]));
/// ```
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
