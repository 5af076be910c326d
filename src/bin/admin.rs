//! CLI administration tool for shorturl.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all shortened URLs with their statistics
//! cargo run --bin admin -- stats
//!
//! # Shorten a URL (idempotent, same as POST /shorten)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`DATABASE_URL` or `DB_*`, `BASE_URL`, `REDIRECT_PREFIX`).
//! `STORAGE_BACKEND` is ignored: the admin tool always uses PostgreSQL.
//! Warnings and errors are logged to stderr; set `RUST_LOG` for more.

use shorturl::application::services::{ShortenService, StatsService};
use shorturl::config::{Config, StorageBackend};
use shorturl::domain::repositories::UrlRecordRepository;
use shorturl::infrastructure::persistence::PgUrlRecordRepository;
use shorturl::server::connect_pool;
use shorturl::telemetry;
use shorturl::utils::short_url::ShortUrlFormatter;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shorturl.
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
    /// Show redirect statistics for all shortened URLs
    Stats,

    /// Shorten a URL
    Shorten {
        /// Long URL to shorten
        url: String,
    },

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
    telemetry::init_cli_tracing("warn");

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if config.database_url.is_none() {
        config.database_url = Some(Config::load_database_url()?);
    }
    config.storage_backend = StorageBackend::Postgres;
    config.validate()?;

    let pool = connect_pool(&config).await?;
    let repository = Arc::new(PgUrlRecordRepository::new(Arc::new(pool)));
    let short_urls = ShortUrlFormatter::new(&config.base_url, &config.redirect_prefix);

    match cli.command {
        Commands::Stats => handle_stats(repository, short_urls).await?,
        Commands::Shorten { url } => handle_shorten(repository, short_urls, url).await?,
        Commands::Db { action } => handle_db_action(action, repository).await?,
    }

    Ok(())
}

/// Prints every record with its statistics.
///
/// # Output Format
///
/// ```text
/// Statistics
///
///   Redirects  Last access          Short URL                       URL
///   ──────────────────────────────────────────────────────────────────────
///   3          2025-06-01 10:30     http://localhost:8080/my/1      https://example.com
/// ```
async fn handle_stats(
    repository: Arc<PgUrlRecordRepository>,
    short_urls: ShortUrlFormatter,
) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let service = StatsService::new(repository, short_urls);
    let mut stats = service
        .list_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list statistics: {}", e))?;

    if stats.is_empty() {
        println!("{}", "  No shortened URLs yet".yellow());
        return Ok(());
    }

    stats.sort_by(|a, b| b.redirects.cmp(&a.redirects));

    println!(
        "  {:<10} {:<20} {:<32} {}",
        "Redirects".bright_white().bold(),
        "Last access".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for stat in &stats {
        println!(
            "  {:<10} {:<20} {:<32} {}",
            stat.redirects.to_string().bright_green(),
            stat.last_access
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            stat.short_url.cyan(),
            stat.url
        );
    }

    println!();
    println!("  Total: {}", stats.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shortens a URL and prints the result.
async fn handle_shorten(
    repository: Arc<PgUrlRecordRepository>,
    short_urls: ShortUrlFormatter,
    url: String,
) -> Result<()> {
    let service = ShortenService::new(repository, short_urls);

    let shortened = service
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Short URL ready".green().bold());
    println!("  URL:       {}", shortened.url);
    println!("  Short URL: {}", shortened.short_url.bright_yellow().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repository: Arc<PgUrlRecordRepository>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            repository
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let records = repository
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
            let redirects = repository
                .total_redirects()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!(
                "  URLs:      {}",
                records.to_string().bright_green().bold()
            );
            println!(
                "  Redirects: {}",
                redirects.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
