//! Cached filter pipeline
//!
//! ```text
//! ViewState ──▶ FilterCriteria ──▶ cache lookup ──hit──────────────┐
//!                                     │                             ▼
//!                                    miss ──▶ apply_filters ──▶ store ──▶ sort ──▶ VirtualList
//! ```
//!
//! The pipeline owns its cache; one pipeline belongs to one view. Results
//! are shared as `Arc<Vec<T>>` so a cache hit costs a reference count, not
//! a copy of the records.

use crate::cache::{CacheStats, DEFAULT_MAX_SIZE, LruCache, generate_key};
use crate::core::error::Result;
use crate::core::{FilterCriteria, Record, RecordSource, sort_records};
use crate::filter::apply_filters;
use crate::state::ViewState;
use std::sync::Arc;

/// Filter + cache + sort for one record view
#[derive(Debug)]
pub struct FilterPipeline<T> {
    cache: LruCache<Arc<Vec<T>>>,
}

impl<T: Record> FilterPipeline<T> {
    /// Create a pipeline whose cache keeps `max_size` results
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: LruCache::new(max_size),
        }
    }

    /// Filter `items`, reusing a cached result when the key matches
    ///
    /// The key combines the criteria with the structural fingerprint of
    /// `items`; see [`crate::cache::key`] for when that goes stale.
    pub fn filter(&mut self, items: &[T], criteria: &FilterCriteria) -> Arc<Vec<T>> {
        let key = generate_key(criteria, items);

        if let Some(entry) = self.cache.get(&key) {
            tracing::debug!(
                results = entry.value.len(),
                access_count = entry.access_count,
                "filter cache hit"
            );
            return Arc::clone(&entry.value);
        }

        let filtered = Arc::new(apply_filters(items, criteria));
        tracing::debug!(
            input = items.len(),
            results = filtered.len(),
            cached = self.cache.len(),
            "filter cache miss"
        );
        self.cache.set(key, Arc::clone(&filtered));
        filtered
    }

    /// Filter then sort according to a view state
    pub fn view(&mut self, items: &[T], state: &ViewState) -> Arc<Vec<T>> {
        let filtered = self.filter(items, &state.criteria);
        match &state.sort {
            Some(spec) => Arc::new(sort_records(filtered.as_ref().clone(), spec)),
            None => filtered,
        }
    }

    /// Fetch records from `source` and filter them
    pub async fn load<S>(&mut self, source: &S, criteria: &FilterCriteria) -> Result<Arc<Vec<T>>>
    where
        S: RecordSource<T> + ?Sized,
    {
        let items = source.list().await?;
        Ok(self.filter(&items, criteria))
    }

    /// Drop cached results whose key contains `pattern`
    pub fn invalidate(&mut self, pattern: &str) -> usize {
        self.cache.invalidate(pattern)
    }

    /// Drop every cached result (e.g. when filters are reset or the view closes)
    pub fn reset(&mut self) {
        tracing::debug!(dropped = self.cache.len(), "filter cache reset");
        self.cache.clear();
    }

    /// Cache statistics for diagnostics
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<T: Record> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}
