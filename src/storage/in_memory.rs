//! In-memory implementation of RecordSource for testing and development

use crate::core::error::{CaseViewError, Result};
use crate::core::{RecordSource, TestCase};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// In-memory test-case store
///
/// Useful for testing, demos and offline views. Uses RwLock for thread-safe
/// access and lists records in id order.
#[derive(Clone, Default)]
pub struct InMemoryCaseStore {
    cases: Arc<RwLock<BTreeMap<i64, TestCase>>>,
}

impl InMemoryCaseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `cases`
    pub fn with_cases(cases: impl IntoIterator<Item = TestCase>) -> Self {
        let map = cases.into_iter().map(|case| (case.id, case)).collect();
        Self {
            cases: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace a test case, returning the previous version
    pub fn insert(&self, case: TestCase) -> Result<Option<TestCase>> {
        let mut cases = self
            .cases
            .write()
            .map_err(|e| CaseViewError::Source(format!("Failed to acquire write lock: {}", e)))?;

        Ok(cases.insert(case.id, case))
    }

    /// Apply `change` to an existing test case
    pub fn update(&self, id: i64, change: impl FnOnce(&mut TestCase)) -> Result<TestCase> {
        let mut cases = self
            .cases
            .write()
            .map_err(|e| CaseViewError::Source(format!("Failed to acquire write lock: {}", e)))?;

        let case = cases
            .get_mut(&id)
            .ok_or_else(|| CaseViewError::Source(format!("Test case {} not found", id)))?;
        change(case);

        Ok(case.clone())
    }

    /// Remove a test case
    pub fn remove(&self, id: i64) -> Result<Option<TestCase>> {
        let mut cases = self
            .cases
            .write()
            .map_err(|e| CaseViewError::Source(format!("Failed to acquire write lock: {}", e)))?;

        Ok(cases.remove(&id))
    }
}

#[async_trait]
impl RecordSource<TestCase> for InMemoryCaseStore {
    async fn list(&self) -> Result<Vec<TestCase>> {
        let cases = self
            .cases
            .read()
            .map_err(|e| CaseViewError::Source(format!("Failed to acquire read lock: {}", e)))?;

        Ok(cases.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TestCase>> {
        let cases = self
            .cases
            .read()
            .map_err(|e| CaseViewError::Source(format!("Failed to acquire read lock: {}", e)))?;

        Ok(cases.get(&id).cloned())
    }
}
