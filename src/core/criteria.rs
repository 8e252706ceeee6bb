//! Filter criteria assembled from the view controls

use crate::core::error::CriteriaError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Which record field(s) a search query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    All,
    Title,
    Description,
    Id,
    Tags,
}

/// How a search query combines with the candidate fields
///
/// `And` and `Or` currently behave the same: a record passes when any
/// candidate field contains the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchOperator {
    #[default]
    And,
    Or,
    Not,
}

/// Free-text search settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    pub query: String,
    pub field: SearchField,
    pub operator: SearchOperator,
}

impl SearchFilter {
    /// Lower-cased, trimmed query, or `None` when there is nothing to search for
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

/// An inclusive date range over one timestamp dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub enabled: bool,
}

impl DateRange {
    /// Enabled range between `start` and `end` (either may be open)
    pub fn between(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            start,
            end,
            enabled: true,
        }
    }

    /// Whether this range constrains anything
    pub fn is_active(&self) -> bool {
        self.enabled && (self.start.is_some() || self.end.is_some())
    }

    /// Inclusive containment check
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| at >= start) && self.end.is_none_or(|end| at <= end)
    }
}

/// The combined search/field/date constraint applied to a record collection
///
/// Every dimension is optional: an empty string or an empty map means
/// "no filter" for that dimension.
///
/// # Example
/// ```
/// use caseview::core::FilterCriteria;
///
/// let criteria = FilterCriteria::from_json(r#"{
///     "search": { "query": "login", "field": "all", "operator": "NOT" },
///     "priority": 1
/// }"#).unwrap();
/// assert_eq!(criteria.priority, "1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: SearchFilter,
    pub project: String,
    pub suite: String,
    #[serde(deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(deserialize_with = "string_or_number")]
    pub priority: String,
    pub dates: BTreeMap<String, DateRange>,
}

impl FilterCriteria {
    /// Decode criteria from a JSON document
    pub fn from_json(raw: &str) -> Result<Self, CriteriaError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Stable serialization of the filter-relevant fields
    ///
    /// Field order is fixed by the struct and `dates` is a `BTreeMap`, so equal
    /// criteria always serialize to the same string.
    pub fn stable_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }

    /// Whether no dimension constrains anything
    pub fn is_empty(&self) -> bool {
        self.search.normalized_query().is_none()
            && self.project.trim().is_empty()
            && self.suite.trim().is_empty()
            && self.status.trim().is_empty()
            && self.priority.trim().is_empty()
            && !self.dates.values().any(DateRange::is_active)
    }
}

/// Accept `"2"`, `2` or `null` for the integer-coded filters
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(i)) => i.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_is_empty() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(criteria.search.field, SearchField::All);
        assert_eq!(criteria.search.operator, SearchOperator::And);
    }

    #[test]
    fn test_whitespace_only_values_are_empty() {
        let criteria = FilterCriteria {
            project: "   ".to_string(),
            search: SearchFilter {
                query: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_from_json_accepts_numbers_and_strings() {
        let criteria = FilterCriteria::from_json(r#"{"status": 2, "priority": "3"}"#).unwrap();
        assert_eq!(criteria.status, "2");
        assert_eq!(criteria.priority, "3");

        let criteria = FilterCriteria::from_json(r#"{"status": null}"#).unwrap();
        assert_eq!(criteria.status, "");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(FilterCriteria::from_json("{not json").is_err());
        assert!(FilterCriteria::from_json(r#"{"search": {"field": "everything"}}"#).is_err());
    }

    #[test]
    fn test_date_range_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let range = DateRange::between(Some(start), Some(end));

        assert!(range.is_active());
        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(end + chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_disabled_or_open_range_is_inactive() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let disabled = DateRange {
            start: Some(start),
            end: None,
            enabled: false,
        };
        assert!(!disabled.is_active());
        assert!(!DateRange::between(None, None).is_active());
    }

    #[test]
    fn test_stable_key_independent_of_date_insertion_order() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let range = DateRange::between(Some(start), None);

        let mut a = FilterCriteria::default();
        a.dates.insert("updated".to_string(), range.clone());
        a.dates.insert("created".to_string(), range.clone());

        let mut b = FilterCriteria::default();
        b.dates.insert("created".to_string(), range.clone());
        b.dates.insert("updated".to_string(), range);

        assert_eq!(a.stable_key(), b.stable_key());
    }
}
