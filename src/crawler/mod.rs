//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML link extraction
//! - Frontier, visit record and depth bookkeeping
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_url, is_html, FetchResult};
pub use parser::extract_links;
pub use scheduler::{Admission, QueuedUrl, Scheduler};

use crate::config::Config;
use crate::output::CrawlStatistics;
use crate::scope::resolve_scope;
use crate::storage::WordStore;
use crate::Result;
use std::sync::Arc;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Resolve the scope from the targets and the scope configuration
/// 2. Build the HTTP client
/// 3. Seed the frontier with the targets
/// 4. Fetch pages, count their words and follow their links
///
/// # Arguments
///
/// * `config` - The effective configuration
/// * `targets` - Seed targets (bare domains or full URLs)
/// * `store` - Where accepted words are counted
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Crawl ran to completion
/// * `Err(SkweezError)` - The URL filter is invalid or the client could
///   not be built
pub async fn crawl(
    config: &Config,
    targets: &[String],
    store: Arc<dyn WordStore>,
) -> Result<CrawlStatistics> {
    let scope = resolve_scope(
        targets,
        &config.scope.domains,
        config.scope.url_filter.as_deref(),
    )?;

    if scope.is_unrestricted() {
        tracing::debug!("Crawl scope is unrestricted");
    } else {
        tracing::debug!("Crawl scope: {:?}", scope);
    }

    let mut coordinator = Coordinator::new(config, scope, store)?;
    let seeded = coordinator.seed(targets);
    if seeded == 0 {
        tracing::warn!("No usable targets, nothing to crawl");
    }

    Ok(coordinator.run().await)
}
