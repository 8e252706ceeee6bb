//! Free-text search predicate

use crate::core::{Record, SearchField, SearchFilter, SearchOperator};

/// Searchable text for one field, or `None` when the record has no such field
fn field_text<T: Record>(record: &T, field: SearchField) -> Option<String> {
    match field {
        SearchField::Title => record.title().map(str::to_string),
        SearchField::Description => record.description().map(str::to_string),
        SearchField::Id => Some(record.id().to_string()),
        SearchField::Tags => record.tags().map(|tags| tags.join(" ")),
        SearchField::All => None,
    }
}

const ALL_FIELDS: [SearchField; 4] = [
    SearchField::Title,
    SearchField::Description,
    SearchField::Id,
    SearchField::Tags,
];

/// Build a predicate for `search`, or `None` when the query is empty
///
/// The query is trimmed and lower-cased once; candidate fields are
/// lower-cased per record.
pub fn search_predicate<T: Record>(search: &SearchFilter) -> Option<impl Fn(&T) -> bool + '_> {
    let query = search.normalized_query()?;

    Some(move |record: &T| {
        let contains = |field: SearchField| {
            field_text(record, field).is_some_and(|text| text.to_lowercase().contains(&query))
        };

        let found = match search.field {
            SearchField::All => ALL_FIELDS.into_iter().any(contains),
            single => contains(single),
        };

        match search.operator {
            SearchOperator::And | SearchOperator::Or => found,
            SearchOperator::Not => !found,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TestCase;
    use chrono::{TimeZone, Utc};

    fn case(id: i64, title: &str) -> TestCase {
        TestCase::new(id, title, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    fn search(query: &str, field: SearchField, operator: SearchOperator) -> SearchFilter {
        SearchFilter {
            query: query.to_string(),
            field,
            operator,
        }
    }

    #[test]
    fn test_empty_query_has_no_predicate() {
        let filter = search("   ", SearchField::All, SearchOperator::Not);
        assert!(search_predicate::<TestCase>(&filter).is_none());
    }

    #[test]
    fn test_all_fields_case_insensitive() {
        let filter = search("LOGIN", SearchField::All, SearchOperator::And);
        let pred = search_predicate::<TestCase>(&filter).unwrap();

        assert!(pred(&case(1, "User Login Flow")));
        assert!(pred(&case(2, "Checkout").with_description("after login")));
        assert!(pred(&case(3, "Checkout").with_tags(["auth", "login"])));
        assert!(!pred(&case(4, "Checkout Flow")));
    }

    #[test]
    fn test_and_and_or_are_identical() {
        let and = search("flow", SearchField::All, SearchOperator::And);
        let or = search("flow", SearchField::All, SearchOperator::Or);
        let and_pred = search_predicate::<TestCase>(&and).unwrap();
        let or_pred = search_predicate::<TestCase>(&or).unwrap();

        for record in [case(1, "User Login Flow"), case(2, "Payment")] {
            assert_eq!(and_pred(&record), or_pred(&record));
        }
    }

    #[test]
    fn test_not_excludes_any_match() {
        let filter = search("login", SearchField::All, SearchOperator::Not);
        let pred = search_predicate::<TestCase>(&filter).unwrap();

        assert!(!pred(&case(1, "User Login Flow")));
        assert!(pred(&case(2, "Checkout Flow")));
    }

    #[test]
    fn test_single_field() {
        let filter = search("login", SearchField::Description, SearchOperator::And);
        let pred = search_predicate::<TestCase>(&filter).unwrap();
        assert!(!pred(&case(1, "User Login Flow")));
        assert!(pred(&case(1, "x").with_description("Login page")));

        let filter = search("42", SearchField::Id, SearchOperator::And);
        let pred = search_predicate::<TestCase>(&filter).unwrap();
        assert!(pred(&case(142, "x")));
        assert!(!pred(&case(7, "42 in title")));
    }

    #[test]
    fn test_absent_field_with_not_passes() {
        let filter = search("smoke", SearchField::Tags, SearchOperator::Not);
        let pred = search_predicate::<TestCase>(&filter).unwrap();
        assert!(pred(&case(1, "smoke test without tags")));

        let filter = search("smoke", SearchField::Tags, SearchOperator::Or);
        let pred = search_predicate::<TestCase>(&filter).unwrap();
        assert!(!pred(&case(1, "smoke test without tags")));
    }
}
