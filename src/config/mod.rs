//! Configuration module for Skweez
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and layering command-line overrides on top of it.
//!
//! # Example
//!
//! ```no_run
//! use skweez::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("skweez.toml")).unwrap();
//! println!("Crawler will use depth: {}", config.crawler.depth);
//! ```

mod overrides;
mod parser;
mod types;
mod validation;

// Re-export types
pub use overrides::Overrides;
pub use types::{
    Config, CrawlerConfig, OutputConfig, ScopeConfig, WordConfig, DEFAULT_DEPTH,
    DEFAULT_MAX_CONCURRENT_PAGES, DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_WORD_LENGTH,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
