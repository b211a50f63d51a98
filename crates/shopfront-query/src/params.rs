//! Query parameters supplied by the presentation layer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::field::Field;
use crate::ordering::OrderBy;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// How results are ordered.
///
/// Deserializes leniently through [`SortKey::parse_lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SortKey {
    /// Cheapest first.
    #[default]
    #[serde(rename = "price")]
    ByPrice,
    /// Best rated first.
    #[serde(rename = "rating")]
    ByRating,
}

impl SortKey {
    /// Parses a sort key, falling back to [`SortKey::ByPrice`] for anything
    /// that is not recognised.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("rating") {
            SortKey::ByRating
        } else {
            SortKey::ByPrice
        }
    }

    /// The ordering clause this key sorts by.
    pub fn order_by(self) -> OrderBy {
        match self {
            SortKey::ByPrice => OrderBy::asc(Field::Price),
            SortKey::ByRating => OrderBy::desc(Field::Rating),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::ByPrice => "price",
            SortKey::ByRating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::parse_lenient(&s)
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse_lenient(s))
    }
}

/// The current search, filter, sort and page selection.
///
/// Owned and mutated by the caller. The engine only reads it, and clamps
/// `page_number` and `page_size` to at least 1 when it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Case-insensitive substring matched against product names.
    pub search_text: String,
    /// Exact category label; `None` or empty disables the filter.
    pub category_filter: Option<String>,
    pub sort_key: SortKey,
    /// 1-based.
    #[serde(deserialize_with = "at_least_one")]
    pub page_number: usize,
    #[serde(deserialize_with = "at_least_one")]
    pub page_size: usize,
}

/// Reads a signed page value, clamping anything below 1 up to 1.
fn at_least_one<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let n = i64::deserialize(deserializer)?;
    Ok(usize::try_from(n.max(1)).unwrap_or(usize::MAX))
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            search_text: String::new(),
            category_filter: None,
            sort_key: SortKey::default(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    /// Creates parameters with default values.
    pub fn new() -> Self {
        QueryParams::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sets the category filter. An empty label clears it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category_filter = (!category.is_empty()).then_some(category);
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// The active category filter, treating an empty label as no filter.
    pub fn category(&self) -> Option<&str> {
        self.category_filter.as_deref().filter(|c| !c.is_empty())
    }
}
