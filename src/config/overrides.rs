//! Command-line overrides layered on top of the file configuration
//!
//! Numeric flags arrive as raw strings. A value that does not parse is
//! reported back to the caller and the previous value (config file or
//! built-in default) is kept, so a typo never aborts a crawl.

use crate::config::types::Config;
use crate::config::validation::MAX_CONCURRENT_PAGES_LIMIT;
use crate::{ConfigError, ConfigResult};
use std::str::FromStr;

/// Values taken from the command line; `None` / `false` leave the config untouched
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub depth: Option<String>,
    pub min_word_length: Option<String>,
    pub max_word_length: Option<String>,
    pub concurrency: Option<String>,
    pub scope: Vec<String>,
    pub url_filter: Option<String>,
    pub output: Option<String>,
    pub json: bool,
    pub no_filter: bool,
}

impl Overrides {
    /// Applies the overrides to `config`
    ///
    /// Returns the non-fatal problems found along the way; each one has
    /// already been resolved by keeping the previous value.
    pub fn apply(&self, config: &mut Config) -> Vec<ConfigError> {
        let mut problems = Vec::new();

        if let Some(raw) = self.depth.as_deref() {
            match parse_flag::<u32>("depth", raw) {
                Ok(depth) => config.crawler.depth = depth,
                Err(e) => problems.push(e),
            }
        }

        if let Some(raw) = self.min_word_length.as_deref() {
            match parse_flag::<usize>("min-word-length", raw) {
                Ok(len) => config.words.min_length = len,
                Err(e) => problems.push(e),
            }
        }

        if let Some(raw) = self.max_word_length.as_deref() {
            match parse_flag::<usize>("max-word-length", raw) {
                Ok(len) => config.words.max_length = len,
                Err(e) => problems.push(e),
            }
        }

        if let Some(raw) = self.concurrency.as_deref() {
            match parse_flag::<usize>("concurrency", raw) {
                Ok(n) if (1..=MAX_CONCURRENT_PAGES_LIMIT).contains(&n) => {
                    config.crawler.max_concurrent_pages = n
                }
                Ok(_) => problems.push(ConfigError::InvalidValue {
                    flag: "concurrency",
                    value: raw.to_string(),
                }),
                Err(e) => problems.push(e),
            }
        }

        config.scope.domains.extend(
            self.scope
                .iter()
                .map(|entry| entry.trim())
                .filter(|entry| !entry.is_empty())
                .map(str::to_string),
        );

        if let Some(filter) = &self.url_filter {
            config.scope.url_filter = Some(filter.clone());
        }

        if let Some(path) = &self.output {
            config.output.path = Some(path.clone());
        }

        if self.json {
            config.output.json = true;
        }

        if self.no_filter {
            config.words.filter = false;
        }

        problems
    }
}

/// Parses a single numeric flag value
fn parse_flag<T: FromStr>(flag: &'static str, raw: &str) -> ConfigResult<T> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        flag,
        value: raw.to_string(),
    })
}
