//! Glean main entry point
//!
//! This is the command-line driver for the Glean page scraper.

use anyhow::Context;
use clap::Parser;
use glean::config::{load_config, validate_urls, Config};
use glean::{extract_emails, save_to_json, Scraper, ScraperConfig};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// URLs scraped when neither a config file nor `--url` names any
const EXAMPLE_URLS: &[&str] = &[
    "https://example.com",
    "https://www.rust-lang.org",
    "https://httpbin.org/html",
];

/// Glean: fetch pages and extract titles, descriptions, links and headings
///
/// Every URL is scraped in its own task; failures are logged and skipped.
#[derive(Parser, Debug)]
#[command(name = "glean")]
#[command(version = "1.0.0")]
#[command(about = "Fetch pages and extract their key fields", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// URL to scrape; repeat to scrape several (replaces the configured list)
    #[arg(long = "url", value_name = "URL")]
    urls: Vec<String>,

    /// Collect headline candidates instead of page fields
    #[arg(long, conflicts_with_all = ["check", "emails"])]
    headlines: bool,

    /// Only check whether each URL answers 200 OK
    #[arg(long, conflicts_with_all = ["headlines", "emails"])]
    check: bool,

    /// Collect email addresses found in each page body
    #[arg(long, conflicts_with_all = ["headlines", "check"])]
    emails: bool,

    /// Write results as JSON to this file (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    let urls = select_urls(&cli, &config)?;
    let output_path = cli
        .output
        .clone()
        .or_else(|| config.output.json_path.as_ref().map(PathBuf::from));

    let scraper_config = ScraperConfig::from(config.scraper);
    tracing::info!(
        "Scraping {} URL(s) (delay {:?}, timeout {:?})",
        urls.len(),
        scraper_config.delay,
        scraper_config.timeout
    );

    let scraper = Scraper::new(scraper_config).context("failed to build HTTP client")?;

    if cli.headlines {
        handle_headlines(&scraper, &urls, output_path.as_deref()).await
    } else if cli.check {
        handle_check(&scraper, &urls, output_path.as_deref()).await
    } else if cli.emails {
        handle_emails(&scraper, &urls, output_path.as_deref()).await
    } else {
        handle_scrape(&scraper, &urls, output_path.as_deref()).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("glean=info,warn"),
            1 => EnvFilter::new("glean=debug,info"),
            2 => EnvFilter::new("glean=trace,debug"),
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

/// Picks the URL list: `--url` first, then the config file
///
/// The example URLs are only used when no config file was given at all.
fn select_urls(cli: &Cli, config: &Config) -> anyhow::Result<Vec<String>> {
    if !cli.urls.is_empty() {
        validate_urls(&cli.urls).context("invalid --url argument")?;
        return Ok(cli.urls.clone());
    }

    if !config.urls.is_empty() {
        return Ok(config.urls.clone());
    }

    if let Some(path) = &cli.config {
        anyhow::bail!(
            "no URLs to scrape: {} has no `urls` and no --url was given",
            path.display()
        );
    }

    tracing::info!("Using the built-in example URLs");
    Ok(EXAMPLE_URLS.iter().map(|url| url.to_string()).collect())
}

/// Writes results to the output file when one is configured
fn write_output<T: serde::Serialize>(data: &T, output_path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = output_path {
        save_to_json(data, path)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        println!("✓ Results written to: {}", path.display());
    }
    Ok(())
}

/// Default mode: batch scrape and print a summary per page
async fn handle_scrape(
    scraper: &Scraper,
    urls: &[String],
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let results = scraper.scrape_urls(urls).await;

    // Stable output order regardless of completion order
    let sorted: BTreeMap<_, _> = results.iter().collect();

    println!("=== Scraped {} of {} page(s) ===\n", sorted.len(), urls.len());
    for (url, data) in &sorted {
        println!("{}", url);
        println!("  Title: {}", data.title);
        if !data.description.is_empty() {
            println!("  Description: {}", data.description);
        }
        println!("  Links: {}", data.links.len());
        println!("  Headings: {}", data.headings.len());
        for heading in data.headings.iter().take(5) {
            println!("    - {}", heading);
        }
        println!();
    }

    write_output(&sorted, output_path)
}

/// `--headlines` mode: headline candidates per page
async fn handle_headlines(
    scraper: &Scraper,
    urls: &[String],
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut found = BTreeMap::new();

    for url in urls {
        match scraper.scrape_headlines(url).await {
            Ok(headlines) => {
                println!("{} ({} headline(s))", url, headlines.len());
                for headline in &headlines {
                    println!("  - {}", headline);
                }
                found.insert(url.clone(), headlines);
            }
            Err(e) => tracing::warn!("Failed to scrape headlines from {}: {}", url, e),
        }
    }

    write_output(&found, output_path)
}

/// `--check` mode: reachability per URL
async fn handle_check(
    scraper: &Scraper,
    urls: &[String],
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut reachable = BTreeMap::new();

    for url in urls {
        let ok = scraper.is_reachable(url).await;
        println!("{} {}", if ok { "✓" } else { "✗" }, url);
        reachable.insert(url.clone(), ok);
    }

    write_output(&reachable, output_path)
}

/// `--emails` mode: email addresses per page body
async fn handle_emails(
    scraper: &Scraper,
    urls: &[String],
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut found = BTreeMap::new();

    for url in urls {
        match scraper.fetch_body(url).await {
            Ok(body) => {
                let emails = extract_emails(&body);
                println!("{} ({} address(es))", url, emails.len());
                for email in &emails {
                    println!("  - {}", email);
                }
                found.insert(url.clone(), emails);
            }
            Err(e) => tracing::warn!("Failed to fetch {}: {}", url, e),
        }
    }

    write_output(&found, output_path)
}
