//! Word extraction from HTML documents
//!
//! This module contains the two synchronous stages that run on every
//! fetched page:
//! - a streaming tokenizer that yields the visible text segments
//! - a word filter that turns each segment into accepted words

mod filter;
mod tokenizer;

pub use filter::{filter_words, strip_symbols, WordFilter, STRIP_SYMBOLS};
pub use tokenizer::{text_segments, TextSegments};

use crate::storage::WordStore;

/// Runs the full extraction pipeline over one page body
///
/// Every accepted word is counted in `store`. Returns the number of word
/// occurrences that were accepted.
///
/// # Example
///
/// ```
/// use skweez::{extract_words, FrequencyCache, WordFilter, WordStore};
///
/// let cache = FrequencyCache::new();
/// let body = b"<html><body><p>The Quick, Brown-Fox jumps!</p></body></html>";
///
/// let accepted = extract_words(body, &WordFilter::default(), &cache);
/// assert_eq!(accepted, 3);
/// assert_eq!(cache.count("Brown-Fox"), 1);
/// assert_eq!(cache.count("The"), 0);
/// ```
pub fn extract_words<S: WordStore + ?Sized>(body: &[u8], filter: &WordFilter, store: &S) -> usize {
    let mut accepted = 0;
    for segment in text_segments(body) {
        for word in filter_words(&segment, filter) {
            store.increment(word);
            accepted += 1;
        }
    }
    accepted
}
