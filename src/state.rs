//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::SqliteUrlMappingRepository;

/// Application state shared across handlers.
///
/// Cloned per request; the service sits behind an `Arc`, so clones are cheap
/// and no request-level state is shared.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<SqliteUrlMappingRepository>>,
    /// Fixed base address for short URLs. When `None`, it is derived from
    /// each request's `Host` header.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<ShortenerService<SqliteUrlMappingRepository>>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            shortener_service,
            public_base_url,
        }
    }
}
