use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a URL before it enters the visit record
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Accept only `http` and `https`
/// 3. Require a host
/// 4. Remove the fragment, so `page#a` and `page#b` are one visit
///
/// Host lowercasing and dot-segment removal come from the URL parser itself.
///
/// # Examples
///
/// ```
/// use skweez::scope::normalize_url;
///
/// let url = normalize_url("https://EXAMPLE.com/a/../page#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;
    normalize(url)
}

/// Resolves a link href found on a page against that page's URL
///
/// Returns None if the link should not be followed:
/// - empty or fragment-only hrefs
/// - `javascript:`, `mailto:`, `tel:` and `data:` links
/// - anything that does not resolve to an HTTP(S) URL with a host
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    base_url.join(href).ok().and_then(|url| normalize(url).ok())
}

fn normalize(mut url: Url) -> UrlResult<Url> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    Ok(url)
}
