//! Scope resolution for Skweez
//!
//! This module turns the seed targets, the additional scope entries and the
//! optional URL filter into the single [`Scope`] a crawl runs under, and
//! provides the URL normalization used by the visit record.

mod domain;
mod matcher;
mod normalize;

use crate::ConfigResult;
use regex::Regex;

// Re-export main functions
pub use domain::{extract_domain, to_uri};
pub use matcher::Scope;
pub use normalize::{normalize_url, resolve_link};

/// The literal scope entry that disables domain checks
pub const WILDCARD: &str = "*";

/// Builds the scope for a run
///
/// Resolution rules, in order:
/// 1. A non-empty `url_filter` is compiled and becomes the only constraint;
///    every domain entry is discarded.
/// 2. Otherwise scope entries and targets are reduced to bare domains with
///    [`extract_domain`] (scope entries first, then targets, duplicates
///    dropped).
/// 3. If any of them is `*`, the list is emptied, which means unrestricted.
///
/// # Arguments
///
/// * `targets` - The seed targets as given on the command line
/// * `scope_entries` - Additional scope entries (domains or URLs)
/// * `url_filter` - Optional regular expression URLs must match
///
/// # Returns
///
/// * `Ok(Scope)` - The resolved scope
/// * `Err(ConfigError::InvalidPattern)` - The URL filter does not compile
///
/// # Examples
///
/// ```
/// use skweez::scope::resolve_scope;
///
/// let targets = vec!["https://example.com/blog".to_string()];
/// let extra = vec!["docs.example.com".to_string()];
///
/// let scope = resolve_scope(&targets, &extra, None).unwrap();
/// assert_eq!(scope.domains(), ["docs.example.com", "example.com"]);
///
/// let scope = resolve_scope(&targets, &["*".to_string()], None).unwrap();
/// assert!(scope.is_unrestricted());
/// ```
pub fn resolve_scope(
    targets: &[String],
    scope_entries: &[String],
    url_filter: Option<&str>,
) -> ConfigResult<Scope> {
    if let Some(filter) = url_filter.filter(|f| !f.is_empty()) {
        return Ok(Scope::Pattern(Regex::new(filter)?));
    }

    let mut domains: Vec<String> = Vec::new();
    for entry in scope_entries.iter().chain(targets) {
        let domain = extract_domain(entry);
        if !domains.contains(&domain) {
            domains.push(domain);
        }
    }

    if domains.iter().any(|d| d == WILDCARD) {
        return Ok(Scope::unrestricted());
    }

    Ok(Scope::Domains(domains))
}
