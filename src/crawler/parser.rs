//! HTML parser for discovering links
//!
//! Every `<a href="...">` on a page is a candidate for the frontier. The
//! parser only resolves and normalizes hrefs; depth and scope are decided by
//! the scheduler.

use crate::scope::resolve_link;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| Selector::parse("a[href]").ok());

/// Extracts all followable links from an HTML document
///
/// Links are returned in document order, resolved against `base_url`,
/// with fragments removed. Duplicates within one page are kept; the visit
/// record takes care of them.
///
/// **Excluded:**
/// - empty and fragment-only hrefs
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - anything that does not resolve to an HTTP(S) URL
///
/// # Example
///
/// ```
/// use skweez::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page#top">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &base_url);
/// assert_eq!(links[0].as_str(), "https://example.com/page");
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Url> {
    let Some(selector) = ANCHOR_SELECTOR.as_ref() else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .collect()
}
