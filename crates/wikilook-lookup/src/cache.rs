use std::num::NonZeroUsize;

use lru::LruCache;
use wikilook_types::LookupResult;

/// Term-keyed memo of lookup results, bounded by entry count.
///
/// Keys are the raw term as typed; no case folding or trimming.
pub(crate) struct LookupCache {
    entries: LruCache<String, LookupResult>,
}

impl LookupCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Hit marks the entry as most recently used
    pub fn get(&mut self, term: &str) -> Option<&LookupResult> {
        self.entries.get(term)
    }

    pub fn insert(&mut self, term: &str, result: LookupResult) {
        if let Some((evicted, _)) = self.entries.push(term.to_string(), result)
            && evicted != term
        {
            tracing::debug!("Evicted '{}' from lookup cache", evicted);
        }
    }

    /// Membership test that does not touch recency
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}
