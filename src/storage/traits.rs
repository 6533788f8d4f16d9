//! Word store trait
//!
//! This module defines the interface the crawler counts words through.

use std::collections::BTreeMap;

/// Trait for word frequency stores
///
/// Implementations are shared by every in-flight page task, so all methods
/// take `&self` and must be safe to call concurrently. No increment may be
/// lost when several tasks count the same word at the same time.
pub trait WordStore: Send + Sync {
    /// Increases the count for `word` by one, inserting it at 1 if absent
    fn increment(&self, word: &str);

    /// Returns the count for `word`, 0 if it was never seen
    fn count(&self, word: &str) -> u64;

    /// Number of distinct words
    fn len(&self) -> usize;

    /// Returns true if no word has been counted yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All distinct words, sorted
    fn words(&self) -> Vec<String>;

    /// Word -> count mapping, sorted by word
    fn snapshot(&self) -> BTreeMap<String, u64>;
}
