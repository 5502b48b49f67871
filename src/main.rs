//! Comment-Scout main entry point
//!
//! This is the command-line interface for the Comment-Scout wall watcher.

use anyhow::Context;
use clap::Parser;
use comment_scout::config::{load_config_with_hash, Config};
use comment_scout::crawler::run_scan;
use comment_scout::profile::{parse_filter_argument, FilterSpec};
use comment_scout::ScoutError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Comment-Scout: watches comment walls for one author's keywords
///
/// Comment-Scout walks the comment walls of the owner's friends (or a
/// preloaded profile list) and reports every comment written by the owner
/// that mentions a configured keyword, with the page it appears on.
#[derive(Parser, Debug)]
#[command(name = "comment-scout")]
#[command(version = "1.0.0")]
#[command(about = "Watches comment walls for one author's keywords", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Only scan profiles whose id ends in these digits: "d" or "d1-d2"
    #[arg(value_name = "FILTER")]
    filter: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scanned without scanning
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    // The command-line filter wins over the configured one
    let filter_expr = cli.filter.as_deref().or(config.target.filter.as_deref());
    let filter = parse_filter_argument(filter_expr);
    if filter.is_none() {
        tracing::info!("No suffix filter set, scanning every profile");
    }

    if cli.dry_run {
        handle_dry_run(&config, filter.as_ref());
        return Ok(());
    }

    handle_scan(&config, filter.as_ref()).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("comment_scout=info,warn"),
            1 => EnvFilter::new("comment_scout=debug,info"),
            2 => EnvFilter::new("comment_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config, filter: Option<&FilterSpec>) {
    println!("=== Comment-Scout Dry Run ===\n");

    println!("Target:");
    println!("  Owner reference: {}", config.target.owner_reference);
    println!("  Author match: {:?}", config.target.author_match);
    println!("  Keywords ({}):", config.target.keywords.len());
    for keyword in &config.target.keywords {
        println!("    * {}", keyword);
    }

    println!("\nProfiles:");
    if config.target.profiles.is_empty() {
        println!("  Resolved from: {}", config.friends_url());
        match filter {
            Some(filter) => println!("  Suffix filter: last digit in {}", filter),
            None => println!("  Suffix filter: none"),
        }
    } else {
        println!("  Preloaded: {}", config.target.profiles.join(", "));
    }

    println!("\nComment API:");
    println!("  Endpoint: {}", config.api.comment_api_url);
    println!("  Comment pages: {}", config.api.comment_base_url);
    println!("  Page size: {}", config.api.page_size);
    println!("  Comments per page: {}", config.api.comments_per_page);
    println!("  Delay between requests: {}ms", config.api.request_delay_ms);
    println!("  Request timeout: {}s", config.api.timeout_secs);

    println!("\nNotifications:");
    match &config.webhook {
        Some(webhook) => println!("  Webhook: {}", webhook.url),
        None => println!("  stdout"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scan operation
async fn handle_scan(config: &Config, filter: Option<&FilterSpec>) -> anyhow::Result<()> {
    match run_scan(config, filter).await {
        Ok(summary) => {
            tracing::info!("Scan completed: {} matches reported", summary.matches);
            Ok(())
        }
        Err(ScoutError::Resolve(e)) => {
            tracing::error!("Could not build the list of profiles to scan: {}", e);
            Err(anyhow::anyhow!(e).context("profile resolution failed, nothing was scanned"))
        }
        Err(e) => {
            tracing::error!("Scan failed: {}", e);
            Err(e.into())
        }
    }
}
