//! Result caching for the filter pipeline

pub mod key;
pub mod lru;

pub use key::{fingerprint, generate_key};
pub use lru::{CacheEntry, CacheStats, DEFAULT_MAX_SIZE, LruCache};
