//! Core module containing the record model, criteria and error types

pub mod criteria;
pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod store;

pub use criteria::{DateRange, FilterCriteria, SearchField, SearchFilter, SearchOperator};
pub use error::{CaseViewError, ConfigError, CriteriaError, SortError};
pub use field::FieldValue;
pub use query::{SortDirection, SortSpec, sort_records};
pub use record::{Record, TestCase};
pub use store::RecordSource;
