//! Cache key derivation for filter results
//!
//! A key is the stable serialization of the criteria followed by a
//! structural fingerprint of the input collection: the id of the first
//! record, the id of the last record and the record count. The fingerprint
//! is deliberately cheap and imprecise. Editing a record in the middle of
//! the collection without changing its boundary ids or length produces the
//! same key, so a cached result can be stale until the cache is reset or the
//! affected keys are invalidated.

use crate::core::{FilterCriteria, Record};

/// Fingerprint used for an empty collection.
pub const EMPTY_FINGERPRINT: &str = "empty";

/// Structural fingerprint `"{first_id}_{last_id}_{len}"`, or `"empty"`.
pub fn fingerprint<T: Record>(items: &[T]) -> String {
    match (items.first(), items.last()) {
        (Some(first), Some(last)) => format!("{}_{}_{}", first.id(), last.id(), items.len()),
        _ => EMPTY_FINGERPRINT.to_string(),
    }
}

/// Derive the cache key for filtering `items` with `filters`.
pub fn generate_key<T: Record>(filters: &FilterCriteria, items: &[T]) -> String {
    format!("{}_{}", filters.stable_key(), fingerprint(items))
}
