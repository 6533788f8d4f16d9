use regex::Regex;
use url::Url;

/// The constraint every crawled URL has to satisfy
///
/// Exactly one of the two forms is active for a run: a URL filter always
/// replaces domain scoping.
#[derive(Debug, Clone)]
pub enum Scope {
    /// Allowed bare domains, matched exactly against the URL host
    ///
    /// An empty list means "no domain restriction", not "nothing allowed".
    Domains(Vec<String>),

    /// A regular expression searched for anywhere in the full URL string
    Pattern(Regex),
}

impl Scope {
    /// A scope that lets every URL through
    pub fn unrestricted() -> Self {
        Self::Domains(Vec::new())
    }

    /// Returns true if no domain restriction applies
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Domains(domains) if domains.is_empty())
    }

    /// The effective domain list; always empty when a URL filter is active
    pub fn domains(&self) -> &[String] {
        match self {
            Self::Domains(domains) => domains,
            Self::Pattern(_) => &[],
        }
    }

    /// Checks whether a URL may be crawled under this scope
    ///
    /// Subdomains are not implied: `example.com` does not admit
    /// `www.example.com`. An entry carrying a port (`127.0.0.1:8080`) is
    /// compared against `host:port` of the URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use skweez::scope::Scope;
    /// use url::Url;
    ///
    /// let scope = Scope::Domains(vec!["example.com".to_string()]);
    /// assert!(scope.allows(&Url::parse("https://example.com/a").unwrap()));
    /// assert!(!scope.allows(&Url::parse("https://www.example.com/").unwrap()));
    /// ```
    pub fn allows(&self, url: &Url) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.is_match(url.as_str()),
            Self::Domains(domains) if domains.is_empty() => true,
            Self::Domains(domains) => {
                let Some(host) = url.host_str() else {
                    return false;
                };
                let authority = url
                    .port_or_known_default()
                    .map(|port| format!("{}:{}", host, port));

                domains.iter().any(|domain| {
                    domain.eq_ignore_ascii_case(host)
                        || authority
                            .as_deref()
                            .is_some_and(|a| domain.eq_ignore_ascii_case(a))
                })
            }
        }
    }
}
