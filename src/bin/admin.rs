//! CLI administration tool for urlmap.
//!
//! Operates on the mapping table directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all mappings
//! cargo run --bin admin -- list
//!
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Point an existing code somewhere else
//! cargo run --bin admin -- update aB3dE9 https://example.org
//!
//! # Delete without a prompt
//! cargo run --bin admin -- delete aB3dE9 -y
//!
//! # Create the schema
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `BASE_URL`: prefix used when printing short URLs
//! - `SHORT_CODE_LENGTH`: length of generated codes

use urlmap::application::services::MappingService;
use urlmap::config::{self, Config, StorageBackend};
use urlmap::domain::entities::Mapping;
use urlmap::infrastructure::persistence::PgMappingRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Service = MappingService<PgMappingRepository>;

/// CLI tool for managing urlmap mappings.
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
    /// List all mappings
    List,

    /// Show a single mapping
    Show {
        /// Short code to look up
        code: String,
    },

    /// Create a mapping for a URL
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Change the target URL of an existing code
    Update {
        /// Short code to update
        code: String,

        /// New absolute http(s) URL
        url: String,
    },

    /// Delete a mapping
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("The admin tool only works with STORAGE_BACKEND=postgres");
    }
    config.validate()?;

    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                config::mask_connection_string(database_url)
            )
        })?;

    let service = MappingService::new(
        Arc::new(PgMappingRepository::new(Arc::new(pool.clone()))),
        &config.base_url,
        config.short_code_length,
    );

    match cli.command {
        Commands::List => list_mappings(&service).await?,
        Commands::Show { code } => show_mapping(&service, &code).await?,
        Commands::Shorten { url } => shorten_url(&service, &url).await?,
        Commands::Update { code, url } => update_mapping(&service, &code, &url).await?,
        Commands::Delete { code, yes } => delete_mapping(&service, &code, yes).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Lists all mappings, oldest first.
///
/// # Output Format
///
/// ```text
/// 📋 Mappings
///
///   Code        Created              URL
///   ───────────────────────────────────────────────────────────────
///   aB3dE9      2024-03-01 12:02     https://example.com/a
/// ```
async fn list_mappings(service: &Service) -> Result<()> {
    println!("{}", "📋 Mappings".bright_blue().bold());
    println!();

    let mappings = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<11} {:<20} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<11} {:<20} {}",
            mapping.short_code.cyan(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_mapping(service: &Service, code: &str) -> Result<()> {
    let mapping = service
        .expand(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_mapping(service, &mapping);

    Ok(())
}

async fn shorten_url(service: &Service, url: &str) -> Result<()> {
    let mapping = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Mapping created".green().bold());
    println!();
    print_mapping(service, &mapping);

    Ok(())
}

async fn update_mapping(service: &Service, code: &str, url: &str) -> Result<()> {
    let mapping = service
        .update(code, url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update {}: {}", code, e))?;

    println!("{}", "✅ Updated successfully".green().bold());
    println!();
    print_mapping(service, &mapping);

    Ok(())
}

/// Deletes a mapping after showing it and asking for confirmation.
///
/// The prompt defaults to No; `--yes` skips it.
async fn delete_mapping(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Mapping".bright_blue().bold());
    println!();

    let mapping = service
        .expand(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_mapping(service, &mapping);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete {}: {}", code, e))?;

    println!();
    println!("{}", "✅ Mapping deleted".green().bold());
    println!();

    Ok(())
}

async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
    }

    Ok(())
}

fn print_mapping(service: &Service, mapping: &Mapping) {
    println!("  Code:      {}", mapping.short_code.cyan());
    println!(
        "  Short URL: {}",
        service.short_url(&mapping.short_code).bright_yellow()
    );
    println!("  URL:       {}", mapping.original_url);
    println!(
        "  Created:   {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!();
}
