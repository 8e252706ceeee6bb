//! View state and its reducer
//!
//! The state of a test-case list view (filters, sort, selection) is an
//! explicit value owned by the view. Every change goes through
//! [`ViewState::reduce`], which consumes the old state and returns the new
//! one, so updates are easy to test and replay.

use crate::core::{DateRange, FilterCriteria, SearchField, SearchOperator, SortSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything a list view needs to derive its visible records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub sort: Option<SortSpec>,
    pub selected: BTreeSet<i64>,
}

/// A single state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetSearchQuery(String),
    SetSearchField(SearchField),
    SetSearchOperator(SearchOperator),
    /// Changing the project also clears the suite, which belongs to it
    SetProject(String),
    SetSuite(String),
    SetStatus(String),
    SetPriority(String),
    SetDateRange { dimension: String, range: DateRange },
    ClearDateRange(String),
    SetSort(Option<SortSpec>),
    Select(i64),
    Deselect(i64),
    ToggleSelection(i64),
    ClearSelection,
    /// Reset every filter; sort and selection are kept
    ResetFilters,
}

impl ViewState {
    /// Apply `action` and return the resulting state
    pub fn reduce(mut self, action: ViewAction) -> Self {
        let criteria = &mut self.criteria;

        match action {
            ViewAction::SetSearchQuery(query) => criteria.search.query = query,
            ViewAction::SetSearchField(field) => criteria.search.field = field,
            ViewAction::SetSearchOperator(operator) => criteria.search.operator = operator,
            ViewAction::SetProject(project) => {
                if project != criteria.project {
                    criteria.suite.clear();
                }
                criteria.project = project;
            }
            ViewAction::SetSuite(suite) => criteria.suite = suite,
            ViewAction::SetStatus(status) => criteria.status = status,
            ViewAction::SetPriority(priority) => criteria.priority = priority,
            ViewAction::SetDateRange { dimension, range } => {
                criteria.dates.insert(dimension, range);
            }
            ViewAction::ClearDateRange(dimension) => {
                criteria.dates.remove(&dimension);
            }
            ViewAction::SetSort(sort) => self.sort = sort,
            ViewAction::Select(id) => {
                self.selected.insert(id);
            }
            ViewAction::Deselect(id) => {
                self.selected.remove(&id);
            }
            ViewAction::ToggleSelection(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
            }
            ViewAction::ClearSelection => self.selected.clear(),
            ViewAction::ResetFilters => *criteria = FilterCriteria::default(),
        }

        self
    }

    /// Apply a sequence of actions in order
    pub fn reduce_all(self, actions: impl IntoIterator<Item = ViewAction>) -> Self {
        actions.into_iter().fold(self, Self::reduce)
    }

    /// Whether any filter is active
    pub fn has_active_filters(&self) -> bool {
        !self.criteria.is_empty()
    }
}
