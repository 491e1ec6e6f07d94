//! CLI administration tool for shortlink.
//!
//! Runs the same shortening and lookup logic as the HTTP service directly
//! against the database.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (optionally with a custom code)
//! cargo run --bin admin -- shorten https://example.com/a --code MyLink
//!
//! # Look up the URL behind a code
//! cargo run --bin admin -- resolve MyLink
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `shortlink::config`);
//! `DATABASE_URL` selects the database.

use shortlink::application::services::ShortenerService;
use shortlink::config;
use shortlink::infrastructure::persistence::{self, MIGRATOR, SqliteUrlMappingRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create (or fetch) the short code for a URL
    Shorten {
        /// The URL to shorten
        url: String,

        /// Custom short code (auto-generated if not provided)
        #[arg(short, long)]
        code: Option<String>,

        /// Base address used to print the full short URL
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Show the URL a short code points to
    Resolve {
        /// The short code to look up
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repository = Arc::new(SqliteUrlMappingRepository::new(pool.clone()));
    let service = ShortenerService::new(repository, config.code_length);

    match cli.command {
        Commands::Shorten {
            url,
            code,
            base_url,
        } => {
            let base_url = base_url
                .or(config.public_base_url)
                .unwrap_or_else(|| format!("http://{}", config.listen_addr));
            handle_shorten(&service, &url, code.as_deref(), &base_url).await?
        }
        Commands::Resolve { code } => handle_resolve(&service, &code).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Shortens a URL and prints the result.
async fn handle_shorten(
    service: &ShortenerService<SqliteUrlMappingRepository>,
    url: &str,
    code: Option<&str>,
    base_url: &str,
) -> Result<()> {
    println!("{}", "Shorten URL".bright_blue().bold());
    println!();

    let shortened = service
        .shorten(url, code, base_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("  URL:       {}", url.cyan());
    println!("  Code:      {}", shortened.short_code.bright_yellow().bold());
    println!("  Short URL: {}", shortened.short_url.bright_green());
    println!();

    Ok(())
}

/// Prints the original URL for a code.
async fn handle_resolve(
    service: &ShortenerService<SqliteUrlMappingRepository>,
    code: &str,
) -> Result<()> {
    match service.resolve(code).await {
        Ok(url) => {
            println!("  {} -> {}", code.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(e) => {
            println!("  {} {}", code.bright_yellow(), e.to_string().red());
            anyhow::bail!("{}", e)
        }
    }
}

/// Displays the number of stored mappings.
async fn handle_stats(service: &ShortenerService<SqliteUrlMappingRepository>) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = service
        .mapping_count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
