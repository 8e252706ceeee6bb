//! # LRU Cache
//!
//! A bounded, string-keyed Least Recently Used cache.
//! Used by the filter pipeline to keep recent filter results, and by the
//! bounded memoizer.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Default capacity when none is configured.
pub const DEFAULT_MAX_SIZE: usize = 50;

/// A cached value together with its bookkeeping.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub key: String,
    pub value: V,
    /// When the entry was inserted
    pub timestamp: DateTime<Utc>,
    /// Number of hits since insertion
    pub access_count: u64,
}

/// Aggregate view of a cache, suitable for a diagnostics overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    pub total_access: u64,
    pub avg_access: f64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

/// A bounded LRU cache keyed by strings.
///
/// The map's iteration order is the access order: the first entry is the
/// least recently used, the last one the most recently used. Touching an
/// entry moves it to the back, so the recency list can never disagree with
/// the key set.
#[derive(Debug)]
pub struct LruCache<V> {
    max_size: usize,
    entries: IndexMap<String, CacheEntry<V>>,
    hits: u64,
    misses: u64,
}

impl<V> LruCache<V> {
    /// Create a new cache holding at most `max_size` entries (minimum 1).
    pub fn new(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            max_size,
            entries: IndexMap::with_capacity(max_size),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up an entry, marking it most recently used on a hit.
    pub fn get(&mut self, key: &str) -> Option<&CacheEntry<V>> {
        let Some(mut entry) = self.entries.shift_remove(key) else {
            self.misses += 1;
            return None;
        };

        self.hits += 1;
        entry.access_count += 1;
        let (index, _) = self.entries.insert_full(entry.key.clone(), entry);
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    /// Look up an entry without touching recency or counters.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Insert a value, evicting the least recently used entry when full.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if self.entries.shift_remove(&key).is_none() && self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        self.entries.insert(
            key.clone(),
            CacheEntry {
                key,
                value,
                timestamp: Utc::now(),
                access_count: 0,
            },
        );
    }

    /// Remove every entry whose key contains `pattern`.
    ///
    /// Returns the number of removed entries.
    pub fn invalidate(&mut self, pattern: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.contains(pattern));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::trace!(pattern, removed, "invalidated cache entries");
        }
        removed
    }

    /// Clear all entries and reset the hit/miss counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the cache contains a key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Configured capacity.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Aggregate statistics.
    pub fn stats(&self) -> CacheStats {
        let size = self.entries.len();
        let total_access: u64 = self.entries.values().map(|e| e.access_count).sum();
        let lookups = self.hits + self.misses;

        CacheStats {
            size,
            max_size: self.max_size,
            total_access,
            avg_access: if size == 0 {
                0.0
            } else {
                total_access as f64 / size as f64
            },
            hits: self.hits,
            misses: self.misses,
            hit_rate: if lookups == 0 {
                0.0
            } else {
                self.hits as f64 / lookups as f64
            },
        }
    }

    fn evict_oldest(&mut self) {
        if let Some((key, _)) = self.entries.shift_remove_index(0) {
            tracing::trace!(key = %key, "evicted least recently used cache entry");
        }
    }
}

impl<V> Default for LruCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}
