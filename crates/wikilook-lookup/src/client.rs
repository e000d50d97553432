use wikilook_types::LookupResult;

use crate::cache::LookupCache;
use crate::error::LookupError;
use crate::source::PageSource;

pub const MISSING_PAGE: &str = "No Wikipedia entry found.";
pub const NO_CONTENT: &str = "No content available.";

/// Looks terms up through a [`PageSource`], memoizing every outcome.
pub struct LookupClient<S> {
    source: S,
    cache: LookupCache,
}

impl<S: PageSource> LookupClient<S> {
    pub fn new(source: S, cache_capacity: usize) -> Self {
        Self {
            source,
            cache: LookupCache::new(cache_capacity),
        }
    }

    /// Never fails: errors and missing pages become the result's `extract`.
    pub fn fetch(&mut self, term: &str) -> LookupResult {
        if let Some(hit) = self.cache.get(term) {
            tracing::debug!("Lookup cache hit for '{}'", term);
            return hit.clone();
        }

        let result = match self.query(term) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Lookup for '{}' failed: {}", term, e);
                LookupResult::new(term, e.to_extract())
            }
        };

        self.cache.insert(term, result.clone());
        tracing::trace!(
            "Lookup cache holds {}/{} terms",
            self.cache.len(),
            self.cache.capacity()
        );
        result
    }

    fn query(&self, term: &str) -> Result<LookupResult, LookupError> {
        let page = self.source.query(term)?.into_page()?;

        if page.is_missing() {
            tracing::debug!("No page for '{}'", term);
            return Ok(LookupResult::new(term, MISSING_PAGE));
        }

        let title = page.title.unwrap_or_else(|| term.to_string());
        let extract = page.extract.unwrap_or_else(|| NO_CONTENT.to_string());
        let thumbnail = page.thumbnail.and_then(|t| t.source);

        Ok(LookupResult::new(title, extract).with_thumbnail(thumbnail))
    }

    /// Thumbnail bytes, uncached
    pub fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        self.source.fetch_bytes(url)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, term: &str) -> bool {
        self.cache.contains(term)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
