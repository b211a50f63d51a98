//! Queryable fields and the trait that exposes them.

use std::fmt;

use crate::value::Value;

/// A product field the query engine can filter or order on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Price,
    Rating,
}

impl Field {
    /// Returns the field name as it appears in catalog files.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Price => "price",
            Field::Rating => "rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types whose fields can be read by the query engine.
///
/// # Example
///
/// ```
/// use shopfront_query::{Field, Queryable, Value};
///
/// struct Listing {
///     title: String,
///     cost: f64,
/// }
///
/// impl Queryable for Listing {
///     fn field_value(&self, field: Field) -> Value<'_> {
///         match field {
///             Field::Name => Value::Text(&self.title),
///             Field::Price => Value::Number(self.cost),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let listing = Listing { title: "Desk".into(), cost: 120.0 };
/// assert_eq!(listing.field_value(Field::Price), Value::Number(120.0));
/// assert!(listing.field_value(Field::Rating).is_none());
/// ```
pub trait Queryable {
    /// Returns the value of `field`, or [`Value::None`] if the type has no
    /// such field.
    fn field_value(&self, field: Field) -> Value<'_>;
}
