//! Output module for the final wordlist and crawl statistics
//!
//! This module handles:
//! - Serializing the frequency cache as plain text or JSON
//! - Writing it to a file or standard output
//! - Recording crawl statistics

pub mod stats;
mod wordlist;

pub use stats::{log_statistics, CrawlStatistics};
pub use wordlist::{emit, write_wordlist, OutputFormat};
