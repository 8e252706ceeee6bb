//! Windowing for long record lists
//!
//! [`VirtualList`] tracks the scroll position of a fixed-row-height list and
//! computes which rows intersect the viewport, padded by `overscan` rows on
//! each side. Only those rows are handed to the renderer; a spacer of
//! [`VirtualList::total_height`] keeps the scrollbar honest.
//!
//! ```
//! use caseview::virtualize::VirtualList;
//!
//! let mut list = VirtualList::new(40.0, 200.0).with_overscan(2);
//! list.set_item_count(1_000);
//! list.on_scroll(400.0);
//!
//! // rows 10..=14 are visible, plus two rows of overscan on each side
//! assert_eq!(list.visible_range(), Some(8..=17));
//! ```

use crate::core::Record;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Default number of extra rows rendered above and below the viewport.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Largest overscan accepted from configuration.
pub const MAX_OVERSCAN: usize = 1_000;

/// A rendered row and its absolute offset from the top of the list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedRow<R> {
    pub index: usize,
    pub top: f64,
    pub content: R,
}

/// Scroll state and window math for a fixed-row-height list
#[derive(Debug, Clone)]
pub struct VirtualList {
    item_count: usize,
    item_height: f64,
    container_height: f64,
    overscan: usize,
    scroll_top: f64,
    scroll_to_index: Option<usize>,
    item_ids: Option<Vec<i64>>,
}

impl VirtualList {
    /// Create an empty list; row heights below one pixel are clamped to one
    pub fn new(item_height: f64, container_height: f64) -> Self {
        Self {
            item_count: 0,
            item_height: item_height.max(1.0),
            container_height: sanitize(container_height),
            overscan: DEFAULT_OVERSCAN,
            scroll_top: 0.0,
            scroll_to_index: None,
            item_ids: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Height of the spacer reserving the full scroll extent
    pub fn total_height(&self) -> f64 {
        self.item_count as f64 * self.item_height
    }

    /// Number of rows that fit in the viewport (rounded up)
    pub fn visible_count(&self) -> usize {
        (self.container_height / self.item_height).ceil() as usize
    }

    fn max_scroll(&self) -> f64 {
        (self.total_height() - self.container_height).max(0.0)
    }

    /// Record a scroll event
    pub fn on_scroll(&mut self, scroll_top: f64) {
        self.scroll_top = sanitize(scroll_top).min(self.max_scroll());
    }

    /// Resize the viewport, keeping the scroll offset in bounds
    pub fn set_container_height(&mut self, container_height: f64) {
        self.container_height = sanitize(container_height);
        self.on_scroll(self.scroll_top);
    }

    /// Jump to `index` when the requested index changes
    ///
    /// Re-sending the same index is a no-op, so the user can scroll away
    /// from a jump target without being pulled back.
    pub fn scroll_to_index(&mut self, index: Option<usize>) {
        if index == self.scroll_to_index {
            return;
        }
        self.scroll_to_index = index;
        if let Some(index) = index {
            self.on_scroll(index as f64 * self.item_height);
        }
    }

    /// Set the row count directly, returning to the top when it changes
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            self.item_count = item_count;
            self.scroll_top = 0.0;
        }
    }

    /// Follow a new record collection, returning to the top when it changed
    ///
    /// The collection counts as changed when its id sequence differs from
    /// the last synced one, so a new filter result of the same length and
    /// with the same boundary ids still resets the scroll position.
    pub fn sync_items<T: Record>(&mut self, items: &[T]) {
        let unchanged = self.item_count == items.len()
            && self
                .item_ids
                .as_ref()
                .is_some_and(|ids| ids.iter().copied().eq(items.iter().map(Record::id)));
        if unchanged {
            return;
        }

        tracing::trace!(items = items.len(), "virtual list items changed");
        self.item_ids = Some(items.iter().map(Record::id).collect());
        self.item_count = items.len();
        self.scroll_top = 0.0;
    }

    /// Indices of the rows to render, or `None` for an empty list
    pub fn visible_range(&self) -> Option<RangeInclusive<usize>> {
        if self.item_count == 0 {
            return None;
        }

        let first = (self.scroll_top / self.item_height).floor() as usize;
        let end = first
            .saturating_add(self.visible_count())
            .saturating_add(self.overscan)
            .min(self.item_count - 1);
        let start = first.saturating_sub(self.overscan).min(end);
        Some(start..=end)
    }

    /// Rows to render with their absolute offsets
    pub fn rows<'a, T>(
        &self,
        items: &'a [T],
    ) -> impl Iterator<Item = (usize, f64, &'a T)> + use<'a, T> {
        let item_height = self.item_height;
        let range = self
            .visible_range()
            .map(|r| {
                let end = r.end().saturating_add(1).min(items.len());
                (*r.start()).min(end)..end
            })
            .unwrap_or(0..0);

        items[range.clone()]
            .iter()
            .zip(range)
            .map(move |(item, index)| (index, index as f64 * item_height, item))
    }

    /// Render only the visible rows through `render_item`
    pub fn render<T, R>(
        &self,
        items: &[T],
        mut render_item: impl FnMut(&T, usize) -> R,
    ) -> Vec<PositionedRow<R>> {
        self.rows(items)
            .map(|(index, top, item)| PositionedRow {
                index,
                top,
                content: render_item(item, index),
            })
            .collect()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
