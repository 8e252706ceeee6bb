//! Record traits defining what the filtering core can see of an item

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base trait for every item the filtering core operates on.
///
/// A record exposes a small set of addressable fields:
/// - id: Unique, stable identifier
/// - title / description / tags: Searchable text
/// - project_name / test_suite_name: Exact-match grouping fields
/// - status / priority: Small integer enums
/// - created_at / updated_at / executed_at: Timestamps for date-range filters
///
/// Everything else is opaque payload, reachable only through
/// [`Record::field_value`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Get the unique identifier of this record
    fn id(&self) -> i64;

    /// Get the title
    fn title(&self) -> Option<&str>;

    /// Get the free-text description
    fn description(&self) -> Option<&str>;

    /// Get the tags attached to the record
    fn tags(&self) -> Option<&[String]> {
        None
    }

    /// Get the name of the owning project
    fn project_name(&self) -> Option<&str>;

    /// Get the name of the owning test suite
    fn test_suite_name(&self) -> Option<&str>;

    /// Get the status code
    fn status(&self) -> Option<i64>;

    /// Get the priority code
    fn priority(&self) -> Option<i64>;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Resolve the `"<dimension>_at"` timestamp (e.g. `"executed"` → `executed_at`)
    ///
    /// Returns `None` when the record has no such field or it is unset.
    fn timestamp(&self, dimension: &str) -> Option<DateTime<Utc>>;

    /// Get the value of a field by name, including opaque payload fields
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// A test case as delivered by the test-case management API
///
/// Fields the filtering core does not know about are kept in `extra` and
/// round-trip through serialization untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCase {
    pub id: i64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub test_suite_name: Option<String>,

    #[serde(default)]
    pub status: Option<i64>,

    #[serde(default)]
    pub priority: Option<i64>,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestCase {
    /// Create a test case with only an id, a title and a creation time
    pub fn new(id: i64, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            description: None,
            tags: None,
            project_name: None,
            test_suite_name: None,
            status: None,
            priority: None,
            created_at,
            updated_at: None,
            executed_at: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project_name = Some(project.into());
        self
    }

    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.test_suite_name = Some(suite.into());
        self
    }

    pub fn with_status(mut self, status: i64) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn with_executed_at(mut self, executed_at: DateTime<Utc>) -> Self {
        self.executed_at = Some(executed_at);
        self
    }
}

impl Record for TestCase {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    fn test_suite_name(&self) -> Option<&str> {
        self.test_suite_name.as_deref()
    }

    fn status(&self) -> Option<i64> {
        self.status
    }

    fn priority(&self) -> Option<i64> {
        self.priority
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn timestamp(&self, dimension: &str) -> Option<DateTime<Utc>> {
        match dimension {
            "created" => Some(self.created_at),
            "updated" => self.updated_at,
            "executed" => self.executed_at,
            other => self
                .extra
                .get(&format!("{}_at", other))
                .and_then(|v| FieldValue::from_json(v).as_datetime()),
        }
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(self.id),
            "title" => self.title.as_deref().into(),
            "description" => self.description.as_deref().into(),
            "tags" => match &self.tags {
                Some(tags) => FieldValue::String(tags.join(" ")),
                None => FieldValue::Null,
            },
            "project_name" => self.project_name.as_deref().into(),
            "test_suite_name" => self.test_suite_name.as_deref().into(),
            "status" => self.status.into(),
            "priority" => self.priority.into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            "executed_at" => self.executed_at.into(),
            other => return self.extra.get(other).map(FieldValue::from_json),
        };
        Some(value)
    }
}
