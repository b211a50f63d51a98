//! Runtime values for field comparison.
//!
//! A [`Value`] is what a [`Queryable`](crate::Queryable) item hands to the
//! query engine for one of its fields. Text is borrowed from the item.

use std::cmp::Ordering;

/// Runtime value of a field, borrowed from the source item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Numeric value.
    Number(f64),
    /// Field not present or not queryable.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Compares two values.
    ///
    /// Numbers use IEEE 754 total ordering, so every pair of numbers is
    /// comparable (NaN sorts above positive infinity). Values of different
    /// kinds are ranked numbers, then text, then `None`, which keeps the
    /// order total for items that mix kinds on one field.
    pub fn compare(&self, other: &Value<'_>) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::Text(_) => 1,
            Value::None => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_none() {
        assert!(Value::None.is_none());
        assert!(!Value::Number(0.0).is_none());
        assert!(!Value::Text("").is_none());
    }

    #[test]
    fn compare_text() {
        assert_eq!(
            Value::Text("apple").compare(&Value::Text("banana")),
            Ordering::Less
        );
        assert_eq!(
            Value::Text("apple").compare(&Value::Text("apple")),
            Ordering::Equal
        );
    }

    #[test]
    fn compare_numbers_is_total() {
        assert_eq!(
            Value::Number(100.0).compare(&Value::Number(150.0)),
            Ordering::Less
        );
        assert_eq!(
            Value::Number(f64::NAN).compare(&Value::Number(f64::INFINITY)),
            Ordering::Greater
        );
    }

    #[test]
    fn none_sorts_last() {
        assert_eq!(Value::None.compare(&Value::Number(1.0)), Ordering::Greater);
        assert_eq!(Value::Text("a").compare(&Value::None), Ordering::Less);
        assert_eq!(Value::None.compare(&Value::None), Ordering::Equal);
    }

    #[test]
    fn mixed_kinds_rank_numbers_before_text() {
        let values = [Value::Text("1"), Value::None, Value::Number(9.0), Value::Number(1.0)];
        assert_eq!(Value::Text("1").compare(&Value::Number(1.0)), Ordering::Greater);
        assert_eq!(Value::Number(1.0).compare(&Value::Text("1")), Ordering::Less);

        for a in &values {
            for b in &values {
                assert_eq!(a.compare(b), b.compare(a).reverse());
                for c in &values {
                    if a.compare(b).is_le() && b.compare(c).is_le() {
                        assert!(a.compare(c).is_le());
                    }
                }
            }
        }
    }
}
