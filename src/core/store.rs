//! Source trait for the records fed into the filtering core

use crate::core::error::Result;
use crate::core::record::Record;
use async_trait::async_trait;

/// Trait for anything that can deliver a record collection
///
/// The CRUD API client lives outside this crate; implement this trait on
/// top of it (or use [`InMemoryCaseStore`](crate::storage::InMemoryCaseStore)
/// in tests and demos) to feed a [`FilterPipeline`](crate::pipeline::FilterPipeline).
#[async_trait]
pub trait RecordSource<T: Record>: Send + Sync {
    /// List every record, in the order the view should receive them
    async fn list(&self) -> Result<Vec<T>>;

    /// Get a record by id
    async fn get(&self, id: i64) -> Result<Option<T>>;
}
