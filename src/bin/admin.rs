//! CLI administration tool for tinylink.
//!
//! Inspects and deletes links and checks the database without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List active links
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show abc123
//!
//! # Soft-delete a link
//! cargo run --bin admin -- links delete abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string

use tinylink::application::services::LinkService;
use tinylink::config::Config;
use tinylink::domain::entities::Link;
use tinylink::domain::error::LinkError;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::utils::code_generator::DEFAULT_CODE_LENGTH;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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
    /// Inspect and manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List active links, newest first
    List,

    /// Show statistics for one link
    Show {
        /// Short code
        code: String,
    },

    /// Soft-delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

type PgLinkService = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repository, DEFAULT_CODE_LENGTH);

    match action {
        LinkAction::List => list_links(&service).await,
        LinkAction::Show { code } => show_link(&service, &code).await,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await,
    }
}

/// Lists active links.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code      Clicks   Created            Target
///   ──────────────────────────────────────────────────────────────
///   abc123    12       2025-01-15 10:30   https://example.com
/// ```
async fn list_links(service: &PgLinkService) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No active links".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<8} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows one active link with its counters.
async fn show_link(service: &PgLinkService, code: &str) -> Result<()> {
    let link = find_link(service, code).await?;

    print_link(&link);
    Ok(())
}

/// Soft-deletes a link after confirmation.
async fn delete_link(service: &PgLinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete Link".bright_blue().bold());
    println!();

    let link = find_link(service, code).await?;
    print_link(&link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted. Its code can now be reused.".green().bold());
    println!();

    Ok(())
}

async fn find_link(service: &PgLinkService, code: &str) -> Result<Link> {
    match service.get_stats(code).await {
        Ok(link) => Ok(link),
        Err(LinkError::NotFound(_)) => anyhow::bail!("No active link with code '{}'", code),
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

fn print_link(link: &Link) {
    let last_clicked = link
        .last_clicked
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("  Code:         {}", link.code.cyan());
    println!("  Target:       {}", link.target);
    println!("  Clicks:       {}", link.clicks.to_string().bright_green().bold());
    println!("  Last clicked: {}", last_clicked.bright_black());
    println!(
        "  Created:      {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let (total, active): (i64, i64) = sqlx::query_as(
                "SELECT COUNT(*), COUNT(*) FILTER (WHERE deleted = FALSE) FROM links",
            )
            .fetch_one(pool)
            .await?;

            println!("  PostgreSQL:   {}", version.bright_white());
            println!("  Links:        {}", total.to_string().bright_green().bold());
            println!("  Active links: {}", active.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
