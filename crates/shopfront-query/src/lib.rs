//! Shopfront query engine: filter, sort and paginate an in-memory product
//! catalog.
//!
//! The whole engine is one pure pipeline. Given a catalog and a set of
//! [`QueryParams`], [`compute_result_page`]:
//!
//! 1. keeps products whose name contains the search text (case-insensitive)
//!    and, when a category is selected, whose category matches exactly;
//! 2. stable-sorts them by ascending price or descending rating;
//! 3. returns the requested page and the page count.
//!
//! Nothing here fails at query time. Page numbers past the end give an empty
//! page, zero page numbers and sizes are clamped to 1, and unknown sort keys
//! fall back to price.
//!
//! # Quick Start
//!
//! ```rust
//! use shopfront_query::{compute_result_page, Catalog, QueryParams, SortKey};
//!
//! let catalog = Catalog::sample();
//! let params = QueryParams::new()
//!     .with_category("Electronics")
//!     .with_sort(SortKey::ByRating);
//!
//! let page = compute_result_page(catalog.products(), &params);
//! let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
//!
//! assert_eq!(names, ["Phone", "Laptop"]);
//! assert_eq!(page.page_count, 1);
//! ```
//!
//! # Sessions
//!
//! [`QuerySession`] holds one user's parameters over a shared catalog and
//! applies [`Action`]s to them. Results are recomputed only when the caller
//! asks for [`QuerySession::current_page`].

mod catalog;
mod clause;
mod error;
mod field;
mod op;
mod ordering;
mod page;
mod params;
mod product;
mod query;
mod session;
mod value;

pub use catalog::Catalog;
pub use clause::{Clause, ClauseValue};
pub use error::{CatalogError, Result};
pub use field::{Field, Queryable};
pub use op::Op;
pub use ordering::{compare_by_orderings, Dir, OrderBy};
pub use page::{PageWindow, ResultPage};
pub use params::{QueryParams, SortKey, DEFAULT_PAGE_SIZE};
pub use product::{Product, ProductId};
pub use query::{compute_result_page, Query};
pub use session::{Action, QuerySession};
pub use value::Value;
