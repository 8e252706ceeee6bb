//! Typed error handling for caseview
//!
//! Filtering, caching and windowing never fail: a malformed filter value
//! excludes everything, a missing field is treated as absent, and a stale
//! cache entry is returned as-is. Errors only exist at the edges where input
//! is parsed or loaded.
//!
//! # Error Categories
//!
//! - [`ConfigError`]: configuration parsing and validation
//! - [`CriteriaError`]: filter criteria that cannot be decoded
//! - [`SortError`]: malformed sort expressions
//!
//! # Example
//!
//! ```rust,ignore
//! use caseview::prelude::*;
//!
//! match FilterCriteria::from_json(raw).map_err(CaseViewError::from) {
//!     Ok(criteria) => {
//!         pipeline.filter(&cases, &criteria);
//!     }
//!     Err(e) => eprintln!("{}: {}", e.error_code(), e),
//! }
//! ```

use thiserror::Error;

/// The main error type for caseview
#[derive(Debug, Error)]
pub enum CaseViewError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Filter criteria could not be decoded
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    /// Sort expression could not be parsed
    #[error(transparent)]
    Sort(#[from] SortError),

    /// A record source failed to deliver records
    #[error("Record source error: {0}")]
    Source(String),
}

impl CaseViewError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CaseViewError::Config(_) => "CONFIG_ERROR",
            CaseViewError::Criteria(_) => "CRITERIA_ERROR",
            CaseViewError::Sort(_) => "SORT_ERROR",
            CaseViewError::Source(_) => "SOURCE_ERROR",
        }
    }
}

/// Result type alias for caseview operations
pub type Result<T> = std::result::Result<T, CaseViewError>;

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// Criteria Errors
// =============================================================================

/// Errors raised while decoding filter criteria
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// The criteria payload is not valid JSON for [`FilterCriteria`](crate::core::FilterCriteria)
    #[error("Invalid filter criteria: {message}")]
    Malformed { message: String },
}

impl From<serde_json::Error> for CriteriaError {
    fn from(err: serde_json::Error) -> Self {
        CriteriaError::Malformed {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Sort Errors
// =============================================================================

/// Errors raised while parsing a sort expression
#[derive(Debug, Error)]
pub enum SortError {
    /// The field part of the expression is empty
    #[error("Sort expression '{expression}' has no field")]
    MissingField { expression: String },

    /// The direction is neither `asc` nor `desc`
    #[error("Unknown sort direction '{direction}' (expected 'asc' or 'desc')")]
    UnknownDirection { direction: String },
}
