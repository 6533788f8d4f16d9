//! Skweez main entry point
//!
//! This is the command-line interface for the Skweez wordlist crawler.

use anyhow::Context;
use clap::Parser;
use skweez::config::{load_config, Config, Overrides};
use skweez::crawler::crawl;
use skweez::output::{emit, log_statistics, OutputFormat};
use skweez::{FrequencyCache, WordStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Skweez: squeezes the words out of websites
///
/// Skweez crawls the given targets up to a configurable depth, staying within
/// their domains (or a custom scope), and builds a wordlist from the visible
/// text of every page it fetches.
#[derive(Parser, Debug)]
#[command(name = "skweez")]
#[command(version)]
#[command(about = "Squeezes the words out of websites", long_about = None)]
struct Cli {
    /// Domains or URLs to start crawling from
    #[arg(value_name = "TARGETS", required = true)]
    targets: Vec<String>,

    /// Depth to spider. 0 = unlimited, 1 = only provided site
    #[arg(short, long, value_name = "N")]
    depth: Option<String>,

    /// Minimum word length (exclusive)
    #[arg(short, long, value_name = "N")]
    min_word_length: Option<String>,

    /// Maximum word length (exclusive)
    #[arg(short = 'n', long, value_name = "N")]
    max_word_length: Option<String>,

    /// Additional domains to crawl, comma-separated. `*` disables scope checks
    #[arg(long, value_delimiter = ',', value_name = "DOMAINS")]
    scope: Vec<String>,

    /// Only crawl URLs matching this regex; replaces --scope and the target domains
    #[arg(short, long, value_name = "REGEX")]
    url_filter: Option<String>,

    /// Write the wordlist to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Write output as JSON (word -> count)
    #[arg(long)]
    json: bool,

    /// Do not filter words by length, shape or printability
    #[arg(long)]
    no_filter: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of pages fetched in parallel
    #[arg(short = 'j', long, value_name = "N")]
    concurrency: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            depth: self.depth.clone(),
            min_word_length: self.min_word_length.clone(),
            max_word_length: self.max_word_length.clone(),
            concurrency: self.concurrency.clone(),
            scope: self.scope.clone(),
            url_filter: self.url_filter.clone(),
            output: self.output.clone(),
            json: self.json,
            no_filter: self.no_filter,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    for problem in cli.overrides().apply(&mut config) {
        tracing::warn!("{}, keeping the previous value", problem);
    }

    tracing::debug!(
        "Depth {}, word length ({}, {}), filter {}, {} workers",
        config.crawler.depth,
        config.words.min_length,
        config.words.max_length,
        if config.words.filter { "on" } else { "off" },
        config.crawler.max_concurrent_pages
    );

    let store = Arc::new(FrequencyCache::new());
    let stats = crawl(&config, &cli.targets, store.clone())
        .await
        .context("crawl failed")?;
    log_statistics(&stats);

    let format = OutputFormat::from_json_flag(config.output.json);
    let output_path = config.output.path.as_deref().map(Path::new);
    emit(store.as_ref(), format, output_path).with_context(|| match output_path {
        Some(path) => format!("failed to write wordlist to {}", path.display()),
        None => "failed to write wordlist to stdout".to_string(),
    })?;

    if store.is_empty() {
        tracing::debug!("No words were collected");
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// Logs always go to stderr so stdout can carry the wordlist.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("skweez=debug,info")
    } else {
        EnvFilter::new("skweez=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
