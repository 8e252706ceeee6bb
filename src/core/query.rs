//! Sort expressions and record sorting

use crate::core::error::SortError;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort field and direction
///
/// # Format
/// - `field:asc` or `field` (ascending)
/// - `field:desc` (descending)
///
/// # Example
/// ```
/// use caseview::core::{SortDirection, SortSpec};
///
/// let spec: SortSpec = "updated_at:desc".parse().unwrap();
/// assert_eq!(spec.field, "updated_at");
/// assert_eq!(spec.direction, SortDirection::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse a `field[:direction]` expression
    pub fn parse(expression: &str) -> Result<Self, SortError> {
        let (field, direction) = match expression.split_once(':') {
            Some((field, direction)) => (field.trim(), Some(direction.trim())),
            None => (expression.trim(), None),
        };

        if field.is_empty() {
            return Err(SortError::MissingField {
                expression: expression.to_string(),
            });
        }

        let direction = match direction.map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(SortError::UnknownDirection {
                    direction: other.to_string(),
                });
            }
        };

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }

    /// Compare two records under this spec
    ///
    /// Records without the field sort last in both directions.
    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        let left = a.field_value(&self.field);
        let right = b.field_value(&self.field);

        match (left.filter(|v| !v.is_null()), right.filter(|v| !v.is_null())) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(l), Some(r)) => match self.direction {
                SortDirection::Asc => l.sort_cmp(&r),
                SortDirection::Desc => r.sort_cmp(&l),
            },
        }
    }
}

impl FromStr for SortSpec {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", self.field, direction)
    }
}

/// Stable sort of records by a [`SortSpec`]
pub fn sort_records<T: Record>(mut data: Vec<T>, spec: &SortSpec) -> Vec<T> {
    data.sort_by(|a, b| spec.compare(a, b));
    data
}
