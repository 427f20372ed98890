use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// The built file→word-set dictionary.
///
/// Maps each indexed file path to the distinct words found in it. Every
/// enumerated file has an entry, possibly empty; entries are never removed
/// or mutated once `build` has returned. Cloning is cheap and shares the
/// underlying dictionary, which is how the HTTP handlers and the lookup
/// tasks hold it.
#[derive(Clone, Debug)]
pub struct WordIndex {
    pub(crate) entries: Arc<DashMap<String, HashSet<String>>>,
}

impl WordIndex {
    /// Number of indexed files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every indexed file path, in no particular order.
    pub fn paths(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Whether `path` is indexed and its word set contains `word` exactly.
    /// Comparison is byte equality: case-sensitive, no normalization.
    pub fn contains(&self, path: &str, word: &str) -> bool {
        self.entries
            .get(path)
            .is_some_and(|words| words.contains(word))
    }

    /// The word set recorded for `path`, if indexed.
    pub fn words(&self, path: &str) -> Option<HashSet<String>> {
        self.entries.get(path).map(|entry| entry.value().clone())
    }
}
