//! Macro-generated test suite for `RecordSource<TestCase>` contract validation.
//!
//! The `record_source_tests!` macro generates a test module that validates
//! any `RecordSource<TestCase>` implementation: listing, lookup by id, and
//! the way a `FilterPipeline` consumes the source.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod source_harness;
//!
//! use source_harness::*;
//! use caseview::storage::InMemoryCaseStore;
//!
//! record_source_tests!(|cases| InMemoryCaseStore::with_cases(cases));
//! ```
//!
//! # Generated Tests
//!
//! - `test_list_empty` — an unseeded source lists nothing
//! - `test_list_returns_every_record` — all seeded ids come back
//! - `test_get_existing` — lookup by id returns the full record
//! - `test_get_nonexistent` — unknown id returns None
//! - `test_pipeline_load` — `FilterPipeline::load` filters what the source lists
//! - `test_pipeline_load_twice_hits_cache` — unchanged source, same criteria, one miss
//! - `test_source_behind_trait_object` — works as `&dyn RecordSource<TestCase>`

/// Generate a `RecordSource<TestCase>` conformance test suite.
///
/// `$factory` must be an expression callable with a `Vec<TestCase>` that
/// returns a source seeded with those records. It is re-evaluated for each
/// test to ensure isolation.
macro_rules! record_source_tests {
    ($factory:expr) => {
        mod record_source_contract_tests {
            use super::*;
            use caseview::prelude::*;
            use std::sync::Arc;

            fn seeded(cases: Vec<TestCase>) -> impl RecordSource<TestCase> {
                ($factory)(cases)
            }

            // ==================================================================
            // Listing
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let source = seeded(Vec::new());

                let all = source.list().await.unwrap();
                assert!(all.is_empty(), "An empty source should list nothing");
            }

            #[tokio::test]
            async fn test_list_returns_every_record() {
                let source = seeded(sample_cases());

                let all = source.list().await.unwrap();
                let mut listed = ids(&all);
                listed.sort_unstable();
                assert_eq!(listed, vec![1, 2, 3, 4, 5, 6]);
            }

            // ==================================================================
            // Lookup
            // ==================================================================

            #[tokio::test]
            async fn test_get_existing() {
                let source = seeded(sample_cases());

                let case = source.get(3).await.unwrap();
                assert!(case.is_some(), "Record 3 should exist");
                let case = case.unwrap();
                assert_eq!(case.title.as_deref(), Some("Checkout with saved card"));
                assert_eq!(case.project_name.as_deref(), Some("Shop"));
                assert_eq!(case.executed_at, Some(day(3, 5)));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let source = seeded(sample_cases());

                let case = source.get(404).await.unwrap();
                assert!(case.is_none(), "Unknown ids should return None");
            }

            // ==================================================================
            // Pipeline integration
            // ==================================================================

            #[tokio::test]
            async fn test_pipeline_load() {
                let source = seeded(sample_cases());
                let mut pipeline = FilterPipeline::new(10);

                let result = pipeline
                    .load(&source, &criteria(r#"{"project": "Portal", "priority": "1"}"#))
                    .await
                    .unwrap();

                let mut found = ids(&result);
                found.sort_unstable();
                assert_eq!(found, vec![1, 5]);
            }

            #[tokio::test]
            async fn test_pipeline_load_twice_hits_cache() {
                let source = seeded(sample_cases());
                let mut pipeline = FilterPipeline::new(10);
                let filters = criteria(r#"{"status": 2}"#);

                let first = pipeline.load(&source, &filters).await.unwrap();
                let second = pipeline.load(&source, &filters).await.unwrap();

                assert!(Arc::ptr_eq(&first, &second));
                assert_eq!(pipeline.stats().hits, 1);
                assert_eq!(pipeline.stats().misses, 1);
            }

            #[tokio::test]
            async fn test_source_behind_trait_object() {
                let source = seeded(sample_cases());
                let dynamic: &dyn RecordSource<TestCase> = &source;
                let mut pipeline = FilterPipeline::new(10);

                let result = pipeline
                    .load(dynamic, &FilterCriteria::default())
                    .await
                    .unwrap();
                assert_eq!(result.len(), 6);
            }
        }
    };
}
