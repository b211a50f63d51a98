//! Comparison operators for query clauses.

/// Comparison operator for a query clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Exact match. Text is compared case-sensitively.
    Eq,
    /// Case-insensitive substring match. Valid for text only.
    ///
    /// An empty needle matches every text value.
    ContainsFolded,
}

impl Op {
    /// Returns `true` if this operator is valid for numeric values.
    pub fn is_number_op(self) -> bool {
        matches!(self, Op::Eq)
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::ContainsFolded => "icontains",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
