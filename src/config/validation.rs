use crate::config::types::{Config, CrawlerConfig, ScopeConfig};
use crate::{ConfigError, ConfigResult};
use regex::Regex;

/// Largest worker pool accepted for concurrent fetches
pub const MAX_CONCURRENT_PAGES_LIMIT: usize = 256;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_crawler_config(&config.crawler)?;
    validate_scope_config(&config.scope)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> ConfigResult<()> {
    // depth is a u32, 0 meaning unlimited, so any value is fine

    if config.max_concurrent_pages < 1 || config.max_concurrent_pages > MAX_CONCURRENT_PAGES_LIMIT
    {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-pages must be between 1 and {}, got {}",
            MAX_CONCURRENT_PAGES_LIMIT, config.max_concurrent_pages
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates scope configuration
fn validate_scope_config(config: &ScopeConfig) -> ConfigResult<()> {
    if config.domains.iter().any(|entry| entry.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "scope domains cannot contain empty entries".to_string(),
        ));
    }

    if let Some(filter) = config.url_filter.as_deref().filter(|f| !f.is_empty()) {
        Regex::new(filter)?;
    }

    Ok(())
}
