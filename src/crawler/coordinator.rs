//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Seeding the frontier from the targets
//! - Running a bounded pool of page tasks
//! - Feeding every fetched body through word extraction
//! - Following discovered links within scope and depth

use crate::config::Config;
use crate::crawler::parser::extract_links;
use crate::crawler::scheduler::{Admission, QueuedUrl, Scheduler};
use crate::crawler::{build_http_client, fetch_url, is_html, FetchResult};
use crate::extract::{extract_words, WordFilter};
use crate::output::CrawlStatistics;
use crate::scope::{normalize_url, to_uri, Scope};
use crate::state::PageState;
use crate::storage::WordStore;
use crate::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use url::Url;

/// What a page task reports back to the coordinator
#[derive(Debug)]
struct PageOutcome {
    queued: QueuedUrl,
    result: PageResult,
}

#[derive(Debug)]
enum PageResult {
    Fetched {
        /// URL after redirects, used for the log line and link resolution
        final_url: Url,
        words: usize,
        links: Vec<Url>,
    },
    Failed {
        reason: String,
    },
}

/// Main crawler coordinator structure
///
/// The coordinator alone owns the scheduler, so the frontier and the visit
/// record need no locking. Page tasks only share the HTTP client and the
/// word store.
pub struct Coordinator {
    scheduler: Scheduler,
    client: Client,
    filter: WordFilter,
    store: Arc<dyn WordStore>,
    max_concurrent: usize,
    stats: CrawlStatistics,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The effective configuration
    /// * `scope` - The resolved scope for this run
    /// * `store` - Where accepted words are counted
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SkweezError)` - The HTTP client could not be built
    pub fn new(
        config: &Config,
        scope: Scope,
        store: Arc<dyn WordStore>,
    ) -> Result<Self> {
        let client = build_http_client(&config.crawler)?;

        Ok(Self {
            scheduler: Scheduler::new(scope, config.crawler.depth),
            client,
            filter: WordFilter::from_config(&config.words),
            store,
            max_concurrent: config.crawler.max_concurrent_pages.max(1),
            stats: CrawlStatistics::default(),
        })
    }

    /// Admits the targets at depth 1
    ///
    /// Bare domains are promoted to `https://` URLs. Targets that are not
    /// valid HTTP(S) URLs or fall outside the scope are logged and skipped.
    ///
    /// # Returns
    ///
    /// The number of targets that were queued
    pub fn seed(&mut self, targets: &[String]) -> usize {
        let mut admitted = 0;

        for target in targets {
            let url = match normalize_url(&to_uri(target)) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Skipping target {}: {}", target, e);
                    continue;
                }
            };

            match self.scheduler.admit(url, 1) {
                Admission::Admitted => admitted += 1,
                Admission::OutOfScope => {
                    self.stats.links_out_of_scope += 1;
                    tracing::warn!("Target {} is outside the crawl scope, skipping", target);
                }
                Admission::AlreadySeen | Admission::DepthExceeded => {
                    tracing::debug!("Ignoring duplicate target {}", target);
                }
            }
        }

        admitted
    }

    /// Runs the main crawl loop
    ///
    /// Keeps up to `max_concurrent` page tasks in flight and returns once
    /// the frontier is empty and every task has reported back. Neither a
    /// failed page nor a panicked page task stops the run.
    pub async fn run(mut self) -> CrawlStatistics {
        let start_time = Instant::now();
        let mut set: JoinSet<PageOutcome> = JoinSet::new();

        tracing::debug!(
            "Starting crawl with {} URLs in frontier, {} workers",
            self.scheduler.frontier_size(),
            self.max_concurrent
        );

        loop {
            while set.len() < self.max_concurrent {
                let Some(queued) = self.scheduler.next_url() else {
                    break;
                };
                set.spawn(process_page(
                    self.client.clone(),
                    Arc::clone(&self.store),
                    self.filter,
                    queued,
                ));
            }

            let Some(joined) = set.join_next().await else {
                break;
            };
            match joined {
                Ok(outcome) => self.handle_outcome(outcome),
                Err(e) => {
                    // The URL is lost with the task and stays in Fetching
                    self.stats.pages_failed += 1;
                    tracing::warn!("Page task failed: {}", e);
                }
            }
        }

        self.stats.unique_words = self.store.len() as u64;
        self.stats.elapsed = start_time.elapsed();

        let unfinished = self.scheduler.count_in_state(PageState::Fetching);
        if unfinished > 0 {
            tracing::warn!("{} pages never reported back", unfinished);
        }
        tracing::debug!(
            "Frontier is empty, {} URLs recorded ({} fetched, {} failed)",
            self.scheduler.visited_count(),
            self.scheduler.count_in_state(PageState::Fetched),
            self.scheduler.count_in_state(PageState::Failed)
        );

        self.stats
    }

    fn handle_outcome(&mut self, outcome: PageOutcome) {
        let PageOutcome { queued, result } = outcome;

        match result {
            PageResult::Fetched {
                final_url,
                words,
                links,
            } => {
                self.scheduler.mark(&queued.url, PageState::Fetched);
                self.stats.pages_fetched += 1;
                self.stats.words_accepted += words as u64;
                tracing::info!("Finished {}", final_url);

                let child_depth = queued.depth + 1;
                for link in links {
                    match self.scheduler.admit(link, child_depth) {
                        Admission::OutOfScope => self.stats.links_out_of_scope += 1,
                        Admission::DepthExceeded => self.stats.links_depth_exceeded += 1,
                        Admission::Admitted | Admission::AlreadySeen => {}
                    }
                }
            }
            PageResult::Failed { reason } => {
                self.scheduler.mark(&queued.url, PageState::Failed);
                self.stats.pages_failed += 1;
                tracing::debug!("Something went wrong: {} ({})", queued.url, reason);
            }
        }
    }
}

/// Fetches one page and runs it through the extraction pipeline
///
/// Tokenizing, filtering and link parsing are synchronous and happen after
/// the last await, so nothing non-`Send` is held across a suspension point.
async fn process_page(
    client: Client,
    store: Arc<dyn WordStore>,
    filter: WordFilter,
    queued: QueuedUrl,
) -> PageOutcome {
    tracing::debug!("Visiting {}", queued.url);

    let result = match fetch_url(&client, &queued.url).await {
        FetchResult::Success {
            final_url,
            status_code,
            content_type,
            body,
        } => {
            tracing::debug!("Visited {} ({})", final_url, status_code);

            let words = extract_words(&body, &filter, store.as_ref());
            let links = if is_html(content_type.as_deref()) {
                extract_links(&String::from_utf8_lossy(&body), &final_url)
            } else {
                Vec::new()
            };

            PageResult::Fetched {
                final_url,
                words,
                links,
            }
        }
        failure => PageResult::Failed {
            reason: failure.failure_reason().unwrap_or_default(),
        },
    };

    PageOutcome { queued, result }
}
