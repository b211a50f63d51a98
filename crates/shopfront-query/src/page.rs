//! Pagination.
//!
//! [`PageWindow`] turns a 1-based page number and a page size into a slice
//! of the sorted results; [`ResultPage`] is what the presentation layer
//! renders.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::product::Product;

/// A normalized page selection. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    number: usize,
    size: usize,
}

impl PageWindow {
    /// Creates a window, clamping zero page numbers and sizes to 1.
    pub fn new(number: usize, size: usize) -> Self {
        PageWindow {
            number: number.max(1),
            size: size.max(1),
        }
    }

    /// A single window large enough to hold `total` items.
    pub fn whole(total: usize) -> Self {
        PageWindow::new(1, total)
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }

    /// Number of pages needed for `total` items. Zero when `total` is zero.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }

    /// The part of `items` on this page. Empty when the page is out of range.
    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.size).min(items.len());
        &items[start..end]
    }

    /// Builds the result page for an already filtered and sorted sequence.
    pub fn paginate<'a, T>(&self, sorted: &[&'a T]) -> ResultPage<'a, T> {
        ResultPage {
            items: self.slice(sorted).to_vec(),
            page_count: self.page_count(sorted.len()),
            page_number: self.number,
            page_size: self.size,
            total_matches: sorted.len(),
        }
    }
}

/// One page of query results plus the metadata needed to render page
/// controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage<'a, T = Product> {
    /// Items on this page, in sort order. Never longer than `page_size`.
    pub items: Vec<&'a T>,
    /// `ceil(total_matches / page_size)`.
    pub page_count: usize,
    /// Effective 1-based page number.
    pub page_number: usize,
    /// Effective page size.
    pub page_size: usize,
    /// Number of items that passed the filters, across all pages.
    pub total_matches: usize,
}

impl<'a, T> ResultPage<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1 && self.page_count > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.page_count
    }

    /// `true` when the requested page lies past the last page.
    pub fn is_beyond_range(&self) -> bool {
        self.page_number > self.page_count.max(1)
    }

    /// Selectable page numbers, `1..=page_count`.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.page_count
    }

    pub fn into_items(self) -> Vec<&'a T> {
        self.items
    }
}
