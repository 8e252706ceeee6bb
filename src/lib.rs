//! # caseview
//!
//! Client-side data layer for large test-case lists: multi-criteria
//! filtering, a memoizing LRU cache of filter results, input rate limiting
//! and list virtualization.
//!
//! ## Features
//!
//! - **Multi-Criteria Filtering**: free-text search with AND/OR/NOT, project/suite, status, priority and date ranges
//! - **Result Caching**: LRU cache keyed by the criteria and a structural fingerprint of the records
//! - **Rate Limiting**: tokio-based debounce and throttle wrappers, plus memoization
//! - **Virtualization**: only the rows intersecting the viewport (plus overscan) are rendered
//! - **Explicit View State**: filters, sort and selection updated through a reducer
//! - **Configuration-Based**: cache size, timings and list geometry from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use caseview::prelude::*;
//!
//! let config = CaseViewConfig::from_yaml_file("caseview.yaml")?;
//! let mut pipeline = config.build_pipeline::<TestCase>();
//! let mut list = config.build_list();
//!
//! let state = ViewState::default().reduce_all([
//!     ViewAction::SetSearchQuery("login".to_string()),
//!     ViewAction::SetPriority("1".to_string()),
//! ]);
//!
//! let visible = pipeline.view(&cases, &state);
//! list.sync_items(&visible);
//! for row in list.render(&visible, |case, _| case.title.clone()) {
//!     println!("{:>6} {:?}", row.top, row.content);
//! }
//! ```

pub mod cache;
pub mod config;
pub mod core;
pub mod filter;
pub mod pipeline;
pub mod state;
pub mod storage;
pub mod timing;
pub mod virtualize;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        CaseViewError, ConfigError, CriteriaError, DateRange, FieldValue, FilterCriteria, Record,
        RecordSource, SearchField, SearchFilter, SearchOperator, SortDirection, SortError,
        SortSpec, TestCase, sort_records,
    };

    // === Cache ===
    pub use crate::cache::{CacheEntry, CacheStats, LruCache, fingerprint, generate_key};

    // === Filtering ===
    pub use crate::filter::{apply_filters, parse_int};
    pub use crate::pipeline::FilterPipeline;

    // === View ===
    pub use crate::state::{ViewAction, ViewState};
    pub use crate::virtualize::{PositionedRow, VirtualList};

    // === Timing ===
    pub use crate::timing::{Debouncer, Memoized, Throttler};

    // === Storage ===
    pub use crate::storage::InMemoryCaseStore;

    // === Config ===
    pub use crate::config::{CacheConfig, CaseViewConfig, ListConfig, TimingConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
