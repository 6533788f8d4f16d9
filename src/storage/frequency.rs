use crate::storage::WordStore;
use dashmap::DashMap;
use std::collections::BTreeMap;

/// Concurrent word -> occurrence count map for one crawl run
///
/// Backed by a sharded `DashMap`: each increment holds the write lock of the
/// shard that owns the word, so concurrent increments never lose updates.
/// Entries are never evicted.
#[derive(Debug, Default)]
pub struct FrequencyCache {
    counts: DashMap<String, u64>,
}

impl FrequencyCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStore for FrequencyCache {
    fn increment(&self, word: &str) {
        if let Some(mut count) = self.counts.get_mut(word) {
            *count += 1;
            return;
        }
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    fn count(&self, word: &str) -> u64 {
        self.counts.get(word).map_or(0, |count| *count)
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.counts.iter().map(|entry| entry.key().clone()).collect();
        words.sort_unstable();
        words
    }

    fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
