//! Clause types for query predicates.
//!
//! A [`Clause`] is a single filter predicate: a field, an operator and a
//! comparison value.

use crate::field::Field;
use crate::op::Op;
use crate::value::Value;

/// The value side of a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    Text(String),
    Number(f64),
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(n)
    }
}

/// A single filter predicate.
///
/// For [`Op::ContainsFolded`] the needle is case-folded once, when the
/// clause is built.
///
/// # Example
///
/// ```
/// use shopfront_query::{Clause, Field, Op, Value};
///
/// let clause = Clause::new(Field::Name, Op::ContainsFolded, "SH");
/// assert!(clause.matches(&Value::Text("Shoes")));
/// assert!(!clause.matches(&Value::Text("Watch")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: Field,
    pub op: Op,
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        let value = match (op, value.into()) {
            (Op::ContainsFolded, ClauseValue::Text(needle)) => {
                ClauseValue::Text(needle.to_lowercase())
            }
            (_, value) => value,
        };
        Clause { field, op, value }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Missing fields and kind mismatches never match.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::Text(pattern), Value::Text(text)) => self.match_text(text, pattern),
            (ClauseValue::Number(expected), Value::Number(actual)) => {
                self.op.is_number_op() && actual == expected
            }
            _ => false,
        }
    }

    fn match_text(&self, text: &str, pattern: &str) -> bool {
        match self.op {
            Op::Eq => text == pattern,
            Op::ContainsFolded => pattern.is_empty() || text.to_lowercase().contains(pattern),
        }
    }
}
