//! CLI administration tool for link-cards.
//!
//! Manages dashboard users and their session tokens, and renders or copies
//! link cards without a browser.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- user add alice
//! cargo run --bin admin -- token create --user alice --name "Laptop"
//! cargo run --bin admin -- token revoke "Laptop"
//! cargo run --bin admin -- card render abc123 --hide-time
//! cargo run --bin admin -- card copy abc123
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*`), `TOKEN_SIGNING_SECRET`
//! and `BASE_URL`.

use link_cards::application::services::{AuthService, LinkService};
use link_cards::config::{self, Config};
use link_cards::domain::repositories::SessionRepository;
use link_cards::infrastructure::clipboard::SystemClipboard;
use link_cards::infrastructure::persistence::{PgLinkRepository, PgSessionRepository};
use link_cards::infrastructure::terminal_notifier::TerminalNotifier;
use link_cards::server;
use link_cards::ui::{BaseUrl, CardContext, CopyButton, LinkCard, LinkCardProps, LinkOptionsDropdown};

use anyhow::{Context, Result};
use askama::Template;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing link-cards.
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
    /// Manage dashboard users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage session tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Render or copy a link card
    Card {
        #[command(subcommand)]
        action: CardAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user
    Add {
        /// Display name, unique
        name: String,
    },

    /// List all users
    List,
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a session token for a user
    Create {
        /// Owner of the token
        #[arg(short, long)]
        user: String,

        /// Token name (e.g., "Laptop", "Work browser")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum CardAction {
    /// Print the card markup for a link
    Render {
        slug: String,

        /// Leave out the creation time
        #[arg(long)]
        hide_time: bool,
    },

    /// Copy a link's short URL to the system clipboard
    Copy {
        slug: String,

        /// Seconds to keep serving the clipboard before exiting
        #[arg(long, default_value_t = 30)]
        hold: u64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => handle_token_action(action, &pool, &config).await?,
        Commands::Card { action } => handle_card_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn session_repository(pool: &PgPool) -> Arc<PgSessionRepository> {
    Arc::new(PgSessionRepository::new(Arc::new(pool.clone())))
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = session_repository(pool);

    match action {
        UserAction::Add { name } => {
            let user = repo
                .create_user(name.trim())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

            println!(
                "{} {} (id {})",
                "✅ User created:".green().bold(),
                user.name.cyan(),
                user.id.to_string().bright_black()
            );
        }
        UserAction::List => {
            println!("{}", "👤 Users".bright_blue().bold());
            println!();

            let users = repo
                .list_users()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

            if users.is_empty() {
                println!("{}", "  No users found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<30} {:<20}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Created".bright_white().bold()
            );
            println!("  {}", "─".repeat(57).bright_black());

            for user in &users {
                println!(
                    "  {:<5} {:<30} {}",
                    user.id.to_string().bright_black(),
                    user.name.cyan(),
                    user.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool, config: &Config) -> Result<()> {
    let repo = session_repository(pool);

    match action {
        TokenAction::Create { user, name, yes } => {
            let auth = AuthService::new(repo.clone(), config.token_signing_secret.clone());
            create_token(repo, &auth, &user, name, yes, &config.base_url).await?;
        }
        TokenAction::List => list_tokens(repo).await?,
        TokenAction::Revoke { name_or_id } => revoke_token(repo, name_or_id).await?,
    }

    Ok(())
}

/// Issues a session token with interactive prompts.
///
/// Only the HMAC of the token is stored; the raw value is shown once.
async fn create_token(
    repo: Arc<PgSessionRepository>,
    auth: &AuthService,
    user_name: &str,
    name: Option<String>,
    skip_confirm: bool,
    base_url: &str,
) -> Result<()> {
    println!("{}", "🔑 Create Session Token".bright_blue().bold());
    println!();

    let user = repo
        .find_user(user_name)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("User '{}' not found", user_name))?;

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Browser")
            .interact_text()?,
    };

    println!("  User: {}", user.name.cyan());
    println!("  Name: {}", token_name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let (raw, record) = auth
        .issue_token(user.id, &token_name, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("  ID:    {}", record.id.to_string().bright_black());
    println!("  Token: {}", raw.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!(
        "Sign in at {}",
        format!("{base_url}/dashboard/login").bright_cyan()
    );
    println!();

    Ok(())
}

/// Lists all session tokens with status indicators.
///
/// ```text
/// 📋 Session Tokens
///
///   ID  User       Name                 Created              Status
///   ─────────────────────────────────────────────────────────────────
///   1   1          Laptop               2024-01-15 10:30     ACTIVE
/// ```
async fn list_tokens(repo: Arc<PgSessionRepository>) -> Result<()> {
    println!("{}", "📋 Session Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create --user <name>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<6} {:<24} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "User".bright_white().bold(),
        "Name".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for token in &tokens {
        let status = if token.is_revoked() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        let last_used = token
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<6} {:<24} {:<20} {}",
            token.id.to_string().bright_black(),
            token.user_id.to_string().bright_black(),
            token.name.cyan(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// Numeric input is looked up as an ID, anything else as an exact name.
async fn revoke_token(repo: Arc<PgSessionRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke Session Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo.find_token_by_id(id).await,
        Err(_) => repo.find_token_by_name(&name_or_id).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Token not found")?;

    if token.is_revoked() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Dispatches card commands.
async fn handle_card_action(action: CardAction, pool: &PgPool, config: &Config) -> Result<()> {
    let links = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));
    let base_url = BaseUrl::new(config.base_url.clone());

    match action {
        CardAction::Render { slug, hide_time } => {
            let link = links
                .get_link(&slug)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            let ctx = CardContext {
                base_url: &base_url,
                options_menu: &LinkOptionsDropdown,
                now: Utc::now(),
            };
            let props = LinkCardProps::new(link, None)
                .disable_options(true)
                .hide_created_at_time(hide_time);

            let html = LinkCard::build(props, &ctx)
                .and_then(|card| card.render())
                .context("Failed to render card")?;

            println!("{html}");
        }
        CardAction::Copy { slug, hold } => {
            let link = links
                .get_link(&slug)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            if cfg!(target_os = "linux") && hold > 0 {
                println!(
                    "{}",
                    format!("After copying, the link stays on the clipboard for up to {hold}s. Copy anything else to finish early.")
                        .bright_black()
                );
            }

            CopyButton::new(base_url.shorten(&link.slug))
                .activate_and_hold(&SystemClipboard::new(), &TerminalNotifier, Duration::from_secs(hold))
                .await?;
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Links: {}", links.to_string().bright_green().bold());
        }
    }

    Ok(())
}
