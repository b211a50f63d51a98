//! Query builder and executor.
//!
//! A [`Query`] holds AND-combined clauses, orderings and an optional page
//! window. [`compute_result_page`] builds one from [`QueryParams`] and runs
//! the full filter → sort → paginate pipeline.

use crate::clause::{Clause, ClauseValue};
use crate::field::{Field, Queryable};
use crate::op::Op;
use crate::ordering::{compare_by_orderings, Dir, OrderBy};
use crate::page::{PageWindow, ResultPage};
use crate::params::QueryParams;
use crate::product::Product;

/// A query for filtering, ordering and paging collections.
///
/// An item matches when every clause matches; an empty query matches
/// everything. Sorting is stable, so items that compare equal on every
/// ordering keep their input order.
///
/// # Example
///
/// ```
/// use shopfront_query::{Field, Product, Query};
///
/// let products = vec![
///     Product::new(1, "Laptop", "Electronics", 800.0, 4.5),
///     Product::new(2, "Phone", "Electronics", 500.0, 4.7),
///     Product::new(3, "Shoes", "Fashion", 100.0, 4.2),
/// ];
///
/// let page = Query::new()
///     .and_eq(Field::Category, "Electronics")
///     .order_desc(Field::Rating)
///     .page(1, 10)
///     .build()
///     .execute(&products);
///
/// assert_eq!(page.page_count, 1);
/// assert_eq!(page.items[0].name, "Phone");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
    orderings: Vec<OrderBy>,
    window: Option<PageWindow>,
}

impl Query {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Query::default()
    }

    /// Builds the pipeline for a set of query parameters.
    ///
    /// An empty search text and an empty or absent category add no clause.
    pub fn from_params(params: &QueryParams) -> Self {
        let mut query = Query::new();
        if !params.search_text.is_empty() {
            query = query.and_contains_folded(Field::Name, &params.search_text);
        }
        if let Some(category) = params.category() {
            query = query.and_eq(Field::Category, category);
        }
        query
            .order(params.sort_key.order_by())
            .page(params.page_number, params.page_size)
            .build()
    }

    // ========================================================================
    // Clauses
    // ========================================================================

    /// Adds a clause. All clauses must match for an item to be included.
    pub fn and(mut self, field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an equality clause.
    pub fn and_eq(self, field: Field, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds a case-insensitive substring clause.
    pub fn and_contains_folded(self, field: Field, needle: &str) -> Self {
        self.and(field, Op::ContainsFolded, needle)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Adds an ordering clause.
    pub fn order(mut self, order_by: OrderBy) -> Self {
        self.orderings.push(order_by);
        self
    }

    pub fn order_by(self, field: Field, dir: Dir) -> Self {
        self.order(OrderBy::new(field, dir))
    }

    pub fn order_asc(self, field: Field) -> Self {
        self.order_by(field, Dir::Asc)
    }

    pub fn order_desc(self, field: Field) -> Self {
        self.order_by(field, Dir::Desc)
    }

    // ========================================================================
    // Paging
    // ========================================================================

    /// Restricts results to one page. Zero values are clamped to 1.
    pub fn page(mut self, number: usize, size: usize) -> Self {
        self.window = Some(PageWindow::new(number, size));
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches every clause.
    pub fn matches<T: Queryable>(&self, item: &T) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.matches(&item.field_value(clause.field)))
    }

    /// Counts the matching items, ignoring ordering and paging.
    pub fn count<T: Queryable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }

    /// Returns every matching item in sort order, ignoring paging.
    pub fn filter<'a, T: Queryable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut results: Vec<&'a T> = items.iter().filter(|item| self.matches(*item)).collect();

        if !self.orderings.is_empty() {
            // sort_by is stable: ties keep input order
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings));
        }

        results
    }

    /// Runs filter → sort → paginate.
    ///
    /// Without a page window the whole result set is returned as one page.
    pub fn execute<'a, T: Queryable>(&self, items: &'a [T]) -> ResultPage<'a, T> {
        let sorted = self.filter(items);
        let window = self
            .window
            .unwrap_or_else(|| PageWindow::whole(sorted.len()));
        window.paginate(&sorted)
    }
}

/// Computes the visible page of `catalog` for `params`.
///
/// Pure: the same inputs always give the same page. Never fails; a page
/// number past the last page yields an empty page with the usual
/// `page_count`.
pub fn compute_result_page<'a>(catalog: &'a [Product], params: &QueryParams) -> ResultPage<'a> {
    let page = Query::from_params(params).execute(catalog);

    tracing::debug!(
        catalog = catalog.len(),
        matches = page.total_matches,
        page = page.page_number,
        pages = page.page_count,
        sort = %params.sort_key,
        "computed result page"
    );

    page
}
