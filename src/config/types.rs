use serde::Deserialize;

/// Default crawl depth (seed plus one hop)
pub const DEFAULT_DEPTH: u32 = 2;

/// Default exclusive lower bound on word length
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Default exclusive upper bound on word length
pub const DEFAULT_MAX_WORD_LENGTH: usize = 24;

/// Default number of pages fetched in parallel
pub const DEFAULT_MAX_CONCURRENT_PAGES: usize = 8;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for Skweez
///
/// Every section and key is optional in the TOML file; missing values fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub words: WordConfig,
    pub scope: ScopeConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl: 0 = unlimited, 1 = seeds only
    pub depth: u32,

    /// Maximum number of pages fetched at the same time
    pub max_concurrent_pages: usize,

    /// Timeout for a single request, in seconds
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            max_concurrent_pages: DEFAULT_MAX_CONCURRENT_PAGES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: format!("skweez/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Word filtering configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct WordConfig {
    /// Words must be strictly longer than this
    pub min_length: usize,

    /// Words must be strictly shorter than this
    pub max_length: usize,

    /// When false, every stripped token is accepted as-is
    pub filter: bool,
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_WORD_LENGTH,
            max_length: DEFAULT_MAX_WORD_LENGTH,
            filter: true,
        }
    }
}

/// Additional scope entries and the optional URL filter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScopeConfig {
    /// Extra domains (or URLs) whose pages may be crawled; `*` disables scope
    pub domains: Vec<String>,

    /// Regular expression a URL must match; replaces domain scope entirely
    pub url_filter: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// File to write the wordlist to; stdout when unset
    pub path: Option<String>,

    /// Write a word -> count JSON object instead of a plain list
    pub json: bool,
}
