//! Docsift main entry point
//!
//! This is the command-line interface for the docsift documentation crawler.

use anyhow::Context;
use clap::Parser;
use docsift::config::load_config_with_hash;
use docsift::crawler::{build_http_client, Record};
use docsift::scrape::crawl_languages;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docsift: a Sphinx documentation site crawler
///
/// Docsift walks each configured language's documentation tree along its
/// "next page" links, extracts per-section search records, and writes the
/// full result set as JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "docsift")]
#[command(version = "1.0.0")]
#[command(about = "Crawl Sphinx documentation into search records", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching anything
    #[arg(long)]
    dry_run: bool,
}

/// The JSON envelope written to stdout after a successful scrape
#[derive(Debug, Serialize)]
struct ScrapeOutput {
    base_url: String,
    data: BTreeMap<String, Vec<Record>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Log output goes to stderr; stdout is reserved for the JSON result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docsift=info,warn"),
            1 => EnvFilter::new("docsift=debug,info"),
            2 => EnvFilter::new("docsift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &docsift::config::Config) {
    println!("=== Docsift Dry Run ===\n");

    println!("Site:");
    println!("  Fetch from:    {}", config.site.local_base_url);
    println!("  Attribute to:  {}", config.site.remote_base_url);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.name);
    println!("  Version: {}", config.user_agent.version);
    println!("  Contact URL: {}", config.user_agent.contact_url);

    println!("\nLanguages ({}):", config.languages.len());
    for language in &config.languages {
        println!(
            "  - {} (index: {}, analyzer: {})",
            language.code,
            docsift::index::index_name(&language.code),
            docsift::index::analyzer_for(&language.code)
        );
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl {} language tree(s)",
        config.languages.len()
    );
}

/// Handles the main crawl operation: crawl every language, dump JSON to stdout
async fn handle_crawl(config: &docsift::config::Config) -> anyhow::Result<()> {
    let client = build_http_client(&config.user_agent).context("failed to build HTTP client")?;

    let results = crawl_languages(&client, config).await?;

    let mut data = BTreeMap::new();
    for result in results {
        tracing::info!(
            "Language '{}': {} records for {}",
            result.code,
            result.records.len(),
            result.base_url
        );
        data.insert(result.code, result.records);
    }

    let output = ScrapeOutput {
        base_url: config.site.remote_base_url.clone(),
        data,
    };

    serde_json::to_writer(std::io::stdout().lock(), &output)?;
    println!();

    Ok(())
}
