/// Reduces a target or scope entry to a bare domain
///
/// Strips a leading `http://` or `https://` (literal, case-sensitive) and
/// cuts everything from the first `/` onwards. Entries without any `/` are
/// taken to be bare domains already and are returned unchanged.
///
/// # Examples
///
/// ```
/// use skweez::scope::extract_domain;
///
/// assert_eq!(extract_domain("https://github.com/edermi/skweez"), "github.com");
/// assert_eq!(extract_domain("github.com/edermi"), "github.com");
/// assert_eq!(extract_domain("github.com"), "github.com");
/// ```
pub fn extract_domain(uri: &str) -> String {
    if !uri.contains('/') {
        return uri.to_string();
    }

    let no_proto = uri.strip_prefix("http://").unwrap_or(uri);
    let no_proto = no_proto.strip_prefix("https://").unwrap_or(no_proto);
    no_proto.split('/').next().unwrap_or(no_proto).to_string()
}

/// Promotes a bare domain to an `https://` URL; full URLs pass through
///
/// # Examples
///
/// ```
/// use skweez::scope::to_uri;
///
/// assert_eq!(to_uri("example.com"), "https://example.com");
/// assert_eq!(to_uri("http://example.com/a"), "http://example.com/a");
/// ```
pub fn to_uri(domain: &str) -> String {
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    }
}
