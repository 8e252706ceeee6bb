//! Filter predicate engine
//!
//! [`apply_filters`] narrows a record collection through a fixed sequence
//! of stages. A stage whose criteria are unset is skipped entirely, so an
//! empty [`FilterCriteria`] returns the input unchanged.
//!
//! 1. Search (see [`search`])
//! 2. Project / suite exact match
//! 3. Status / priority integer match
//! 4. Date ranges (see [`dates`])
//!
//! Malformed numeric filters never match and missing record fields count as
//! absent; nothing here can fail.

pub mod dates;
pub mod search;

use crate::core::{FilterCriteria, Record};

/// Parse an integer the way a lenient UI parser does
///
/// Leading whitespace and a sign are accepted, then as many digits as are
/// present; trailing garbage is ignored (`"12abc"` → 12). Returns `None` when
/// no digit leads the value.
pub fn parse_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Active exact-match value, or `None` when the filter is blank
fn exact(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

/// Active integer filter: `None` when blank, `Some(None)` when malformed
fn integer(value: &str) -> Option<Option<i64>> {
    (!value.trim().is_empty()).then(|| parse_int(value))
}

/// Apply `filters` to `items`, preserving the order of surviving records
pub fn apply_filters<T: Record>(items: &[T], filters: &FilterCriteria) -> Vec<T> {
    let mut result: Vec<&T> = items.iter().collect();

    if let Some(matches) = search::search_predicate::<T>(&filters.search) {
        result.retain(|record| matches(*record));
    }

    if let Some(project) = exact(&filters.project) {
        result.retain(|record| record.project_name() == Some(project));
    }

    if let Some(suite) = exact(&filters.suite) {
        result.retain(|record| record.test_suite_name() == Some(suite));
    }

    if let Some(status) = integer(&filters.status) {
        result.retain(|record| status.is_some() && record.status() == status);
    }

    if let Some(priority) = integer(&filters.priority) {
        result.retain(|record| priority.is_some() && record.priority() == priority);
    }

    let ranges = dates::active_ranges(&filters.dates);
    if !ranges.is_empty() {
        result.retain(|record| dates::within_ranges(*record, &ranges));
    }

    result.into_iter().cloned().collect()
}
