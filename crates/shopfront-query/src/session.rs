//! Query sessions: the owner of the current parameters.
//!
//! A [`QuerySession`] borrows a [`Catalog`] and owns one user's
//! [`QueryParams`]. [`QuerySession::dispatch`] only updates parameters;
//! callers recompute with [`QuerySession::current_page`] before presenting
//! results. Nothing is recomputed implicitly.

use crate::catalog::Catalog;
use crate::page::ResultPage;
use crate::params::{QueryParams, SortKey};
use crate::query::compute_result_page;

/// A user input that changes the query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the search text.
    SetSearchQuery(String),
    /// Select a category. An empty label selects all categories.
    SetFilterCategory(String),
    SetSortBy(SortKey),
    /// Jump to a 1-based page. Zero is treated as 1.
    SetPage(usize),
}

/// One browsing session over a shared catalog.
///
/// The page size is fixed when the session is created.
#[derive(Debug, Clone)]
pub struct QuerySession<'c> {
    catalog: &'c Catalog,
    params: QueryParams,
}

impl<'c> QuerySession<'c> {
    /// Starts a session with default parameters.
    pub fn new(catalog: &'c Catalog) -> Self {
        QuerySession::with_params(catalog, QueryParams::default())
    }

    /// Starts a session with the given initial parameters.
    pub fn with_params(catalog: &'c Catalog, mut params: QueryParams) -> Self {
        params.page_number = params.page_number.max(1);
        params.page_size = params.page_size.max(1);
        QuerySession { catalog, params }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Applies an action to the parameters.
    ///
    /// The page number is left alone when the search, category or sort
    /// changes; a page that falls out of range renders empty.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatching query action");

        match action {
            Action::SetSearchQuery(text) => self.params.search_text = text,
            Action::SetFilterCategory(category) => {
                self.params.category_filter = (!category.is_empty()).then_some(category);
            }
            Action::SetSortBy(sort_key) => self.params.sort_key = sort_key,
            Action::SetPage(page) => self.params.page_number = page.max(1),
        }
    }

    /// Computes the page for the current parameters.
    pub fn current_page(&self) -> ResultPage<'c> {
        compute_result_page(self.catalog.products(), &self.params)
    }
}
