//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::{self, MIGRATOR, SqliteUrlMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema migrations
/// - Shortener service and router
/// - Axum HTTP server, stopped by SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;
    info!("Connected to database");

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    info!("Migrations applied");

    let repository = Arc::new(SqliteUrlMappingRepository::new(pool.clone()));
    let shortener_service = Arc::new(ShortenerService::new(repository, config.code_length));
    let state = AppState::new(shortener_service, config.public_base_url.clone());

    let app = app_router(state, &config.cors_allowed_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

/// Waits for SIGINT (Ctrl-C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = wait_for_signal("Ctrl+C", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for_signal("SIGTERM", async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// Resolves when `signal` fires. A handler that failed to install never
/// resolves, so it cannot trigger a shutdown.
async fn wait_for_signal<F, E>(name: &str, signal: F)
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    if let Err(err) = signal.await {
        error!("Failed to install {} handler: {}", name, err);
        std::future::pending::<()>().await;
    }
}
