//! Skweez: squeezes the words out of websites
//!
//! This crate implements a focused web crawler that follows links within a
//! configurable scope and depth, extracts the visible text of every fetched
//! page and turns it into a frequency-counted wordlist.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod scope;
pub mod state;
pub mod storage;

use thiserror::Error;

/// Main error type for Skweez operations
#[derive(Debug, Error)]
pub enum SkweezError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid value '{value}' for --{flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("Invalid URL filter: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Skweez operations
pub type Result<T> = std::result::Result<T, SkweezError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract_words, filter_words, text_segments, WordFilter};
pub use scope::{extract_domain, normalize_url, resolve_scope, to_uri, Scope};
pub use state::PageState;
pub use storage::{FrequencyCache, WordStore};
