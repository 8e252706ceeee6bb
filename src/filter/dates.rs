//! Date-range predicate

use crate::core::{DateRange, Record};
use std::collections::BTreeMap;

/// Whether `record` falls inside every active range
///
/// The record's `"<dimension>_at"` timestamp is used, falling back to
/// `created_at` when the record has none.
pub fn within_ranges<T: Record>(record: &T, ranges: &[(&str, &DateRange)]) -> bool {
    ranges.iter().all(|(dimension, range)| {
        let at = record
            .timestamp(dimension)
            .unwrap_or_else(|| record.created_at());
        range.contains(at)
    })
}

/// Collect the ranges that actually constrain something
pub fn active_ranges(dates: &BTreeMap<String, DateRange>) -> Vec<(&str, &DateRange)> {
    dates
        .iter()
        .filter(|(_, range)| range.is_active())
        .map(|(dimension, range)| (dimension.as_str(), range))
        .collect()
}
