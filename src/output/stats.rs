//! Crawl statistics
//!
//! The coordinator fills in a [`CrawlStatistics`] while it runs; the binary
//! logs it once at the end. Everything goes to the log stream because
//! stdout may carry the wordlist itself.

use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Pages that returned a 2xx response
    pub pages_fetched: u64,

    /// Pages that failed with a network error or non-2xx status
    pub pages_failed: u64,

    /// Targets and links rejected by the scope
    pub links_out_of_scope: u64,

    /// Links rejected because they were deeper than the depth limit
    pub links_depth_exceeded: u64,

    /// Accepted word occurrences across all pages
    pub words_accepted: u64,

    /// Distinct words in the final wordlist
    pub unique_words: u64,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,
}

impl CrawlStatistics {
    /// Total number of pages a fetch was attempted for
    pub fn pages_total(&self) -> u64 {
        self.pages_fetched + self.pages_failed
    }
}

/// Logs statistics at info level in a formatted manner
pub fn log_statistics(stats: &CrawlStatistics) {
    tracing::info!(
        "Crawl finished in {:.2?}: {} pages fetched, {} failed, {} unique words ({} occurrences)",
        stats.elapsed,
        stats.pages_fetched,
        stats.pages_failed,
        stats.unique_words,
        stats.words_accepted
    );

    if stats.links_out_of_scope > 0 || stats.links_depth_exceeded > 0 {
        tracing::info!(
            "Links not followed: {} out of scope, {} beyond max depth",
            stats.links_out_of_scope,
            stats.links_depth_exceeded
        );
    }
}
