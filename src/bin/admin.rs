//! CLI administration tool for url-shortener.
//!
//! Runs the same services as the HTTP server directly against the database.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//!
//! # Count stored URLs
//! cargo run --bin admin -- stats
//!
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # Look up the target of a code
//! cargo run --bin admin -- resolve Xk3_a9Qz
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DB_URI` (required), `DB_NAME`, `LOCAL_BASE_URL`.

use url_shortener::api::dto::shorten::EXPIRES_FORMAT;
use url_shortener::config;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::PgUrlRepository;
use url_shortener::prelude::{RedirectError, ShortenError};
use url_shortener::server::connect_database;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::RandomCodeGenerator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Shorten a URL
    Shorten {
        /// Absolute URL to shorten
        url: String,
    },

    /// Print the URL a code redirects to
    Resolve {
        /// Short code
        code: String,
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
    let pool = connect_database(&config).await?;
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, repository.as_ref()).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Shorten { url } => {
            let state = AppState::new(repository, Arc::new(RandomCodeGenerator), config.base_url);
            shorten(&state, &url).await?;
        }
        Commands::Resolve { code } => {
            let state = AppState::new(repository, Arc::new(RandomCodeGenerator), config.base_url);
            resolve(&state, &code).await?;
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    pool: &PgPool,
    repository: &dyn UrlRepository,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            if !repository.health_check().await {
                anyhow::bail!("Database health check failed");
            }

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Displays the number of stored and not-yet-expired URLs.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let unexpired: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE expires_at > NOW()")
        .fetch_one(pool)
        .await?;

    println!("  URLs:        {}", total.to_string().bright_green().bold());
    println!(
        "  Not expired: {}",
        unexpired.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn shorten(state: &AppState, url: &str) -> Result<()> {
    match state.shorten_service.shorten(url).await {
        Ok(shortened) => {
            println!("{}", "Short URL created".green().bold());
            println!();
            println!("  Short URL: {}", shortened.short_url.bright_yellow().bold());
            println!("  Code:      {}", shortened.code.cyan());
            println!(
                "  Expires:   {}",
                shortened.expires_at.format(EXPIRES_FORMAT).to_string()
            );
            println!("  ID:        {}", shortened.id.to_string().bright_black());
            println!();
            Ok(())
        }
        Err(e @ (ShortenError::InvalidUrl(_) | ShortenError::CodeInUse(_))) => {
            println!("{} {}", "Rejected:".red().bold(), e);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

async fn resolve(state: &AppState, code: &str) -> Result<()> {
    match state.redirect_service.resolve(code).await {
        Ok(long_url) => {
            println!("  {} -> {}", code.cyan(), long_url.bright_white());
            Ok(())
        }
        Err(e @ RedirectError::NoSuchCode(_)) => {
            println!("{}", e.to_string().yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve code: {}", e)),
    }
}
