use crate::config::WordConfig;
use regex::Regex;
use std::sync::LazyLock;

/// Punctuation stripped from both ends of every candidate
pub const STRIP_SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Starts and ends with an ASCII letter or digit, anything in between
static VALID_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:.*[a-zA-Z0-9])?$").expect("word shape pattern is valid")
});

/// Anything outside the graphic categories (L, M, N, P, S) and the ASCII space.
/// Unassigned and private-use code points fall outside them too.
static UNPRINTABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{M}\p{N}\p{P}\p{S} ]").expect("printable class pattern is valid")
});

/// Length, shape and printability rules applied to candidate words
///
/// Both length bounds are exclusive: with the defaults (3, 24) a word is
/// kept when it is 4 to 23 bytes long. Length and printability are judged
/// on the word as it appeared in the text, punctuation included; the
/// shape check and the stored value use the stripped form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFilter {
    pub min_length: usize,
    pub max_length: usize,
    pub enabled: bool,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::from_config(&WordConfig::default())
    }
}

impl WordFilter {
    /// An enabled filter with the given exclusive bounds
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            enabled: true,
        }
    }

    /// A filter that accepts every stripped candidate, even an empty one
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn from_config(config: &WordConfig) -> Self {
        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            enabled: config.filter,
        }
    }

    /// Checks one raw candidate, returning the stripped word if accepted
    ///
    /// # Examples
    ///
    /// ```
    /// use skweez::WordFilter;
    ///
    /// let filter = WordFilter::default();
    /// assert_eq!(filter.accept("Quick,"), Some("Quick"));
    /// assert_eq!(filter.accept("The"), None);
    /// ```
    pub fn accept<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let candidate = strip_symbols(raw);

        if !self.enabled {
            return Some(candidate);
        }

        let within_bounds = raw.len() > self.min_length && raw.len() < self.max_length;
        let accepted = within_bounds
            && VALID_WORD.is_match(candidate)
            && is_printable(raw);

        accepted.then_some(candidate)
    }
}

/// Splits a text segment on spaces and yields the accepted words in order
///
/// Only the space character separates candidates; tabs and newlines stay
/// inside a candidate (and make it fail the printability check).
pub fn filter_words<'a>(
    segment: &'a str,
    filter: &'a WordFilter,
) -> impl Iterator<Item = &'a str> + 'a {
    segment.split(' ').filter_map(move |raw| filter.accept(raw))
}

/// Trims the punctuation set from both ends
pub fn strip_symbols(word: &str) -> &str {
    word.trim_matches(|c: char| STRIP_SYMBOLS.contains(c))
}

/// True if every character is graphic or the ASCII space
fn is_printable(word: &str) -> bool {
    !UNPRINTABLE.is_match(word)
}
