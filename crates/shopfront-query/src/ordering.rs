//! Ordering types for query result sorting.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for field-based ordering.

use std::cmp::Ordering;

use crate::field::{Field, Queryable};
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering clause: a field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderBy {
    pub field: Field,
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ordering with the given direction.
    pub fn new(field: Field, dir: Dir) -> Self {
        OrderBy { field, dir }
    }

    /// Creates a new ascending ordering for the given field.
    pub fn asc(field: Field) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Creates a new descending ordering for the given field.
    pub fn desc(field: Field) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Compares two values according to this ordering.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.dir.apply(a.compare(b))
    }
}

/// Compares two items using a list of ordering clauses.
///
/// The first clause is the primary key, later ones break ties. When every
/// clause compares equal the result is `Equal`, so a stable sort keeps the
/// input order.
pub fn compare_by_orderings<T: Queryable>(a: &T, b: &T, orderings: &[OrderBy]) -> Ordering {
    for order_by in orderings {
        let val_a = a.field_value(order_by.field);
        let val_b = b.field_value(order_by.field);

        match order_by.compare(&val_a, &val_b) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }
    Ordering::Equal
}
