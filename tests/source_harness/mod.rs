//! Shared test harness for record views
//!
//! Provides a small, hand-written `TestCase` dataset spanning two projects,
//! every status and priority, optional fields left empty, and the three
//! timestamp dimensions, plus generators for long lists.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod source_harness;
//! use source_harness::*;
//! ```

#![allow(dead_code, unused_macros)]

#[macro_use]
mod record_source_tests;

use caseview::prelude::*;
use chrono::TimeZone;

/// Midnight UTC on the given day of 2024
pub fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0).unwrap()
}

/// Six test cases across the Portal and Shop projects
///
/// | id | project | suite    | status | priority | notes                      |
/// |----|---------|----------|--------|----------|----------------------------|
/// | 1  | Portal  | Auth     | 1      | 1        | "login" in title, executed |
/// | 2  | Portal  | Auth     | 2      | 2        |                            |
/// | 3  | Shop    | Checkout | 1      | 1        | executed                   |
/// | 4  | Shop    | Cart     | 3      | 3        | no description, updated    |
/// | 5  | Portal  | Session  | 2      | 1        | "login" in description     |
/// | 6  | -       | -        | -      | -        | bare record                |
pub fn sample_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(1, "User login with valid credentials", day(1, 10))
            .with_description("Verify the dashboard opens")
            .with_tags(["auth", "smoke"])
            .with_project("Portal")
            .with_suite("Auth")
            .with_status(1)
            .with_priority(1)
            .with_executed_at(day(2, 1)),
        TestCase::new(2, "Password reset email", day(1, 15))
            .with_description("Reset link is sent")
            .with_tags(["auth"])
            .with_project("Portal")
            .with_suite("Auth")
            .with_status(2)
            .with_priority(2),
        TestCase::new(3, "Checkout with saved card", day(2, 20))
            .with_description("Payment via stored card")
            .with_tags(["payments", "smoke"])
            .with_project("Shop")
            .with_suite("Checkout")
            .with_status(1)
            .with_priority(1)
            .with_executed_at(day(3, 5)),
        TestCase::new(4, "Cart total recalculation", day(3, 1))
            .with_project("Shop")
            .with_suite("Cart")
            .with_status(3)
            .with_priority(3)
            .with_updated_at(day(3, 10)),
        TestCase::new(5, "Logout clears session", day(3, 15))
            .with_description("Session cookie removed after login")
            .with_tags(["auth"])
            .with_project("Portal")
            .with_suite("Session")
            .with_status(2)
            .with_priority(1),
        TestCase::new(6, "Search suggestions", day(4, 1)),
    ]
}

/// `count` generated cases with ids `1..=count`, cycling priority 1..=3
pub fn generated_cases(count: i64) -> Vec<TestCase> {
    (1..=count)
        .map(|id| {
            TestCase::new(id, format!("Generated case {}", id), day(5, 1))
                .with_project(if id % 2 == 0 { "Portal" } else { "Shop" })
                .with_priority(id % 3 + 1)
        })
        .collect()
}

/// Ids of `cases`, in order
pub fn ids(cases: &[TestCase]) -> Vec<i64> {
    cases.iter().map(|case| case.id).collect()
}

/// Criteria built from JSON, panicking on malformed input
pub fn criteria(json: &str) -> FilterCriteria {
    FilterCriteria::from_json(json).unwrap()
}
