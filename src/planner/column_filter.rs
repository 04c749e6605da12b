//! Normalized per-column predicate filters
//!
//! The WHERE-clause analyzer hands the pruner one `ColumnFilter` per
//! constrained column. Only two shapes survive normalization: a bound range
//! and an explicit membership list; everything else arrives as "no filter".

use serde::{Deserialize, Serialize};

/// Literal value extracted from a normalized predicate. String-form values
/// stay strings even when the column is typed Date; the hash encoding
/// dispatches on the literal shape (see `hash_key`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralValue {
    Int(i64),
    String(String),
    /// Day count, matching the storage layer's date representation.
    Date { days: i32 },
    Boolean(bool),
}

/// Left-hand operand of a normalized predicate. Pruning can only derive
/// candidate values when the operand is the bare column itself; a column
/// wrapped in a function call would have to be evaluated first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredicateOperand {
    Column(String),
    Function { name: String, column: String },
}

impl PredicateOperand {
    pub fn is_bare_column(&self, column_name: &str) -> bool {
        matches!(self, PredicateOperand::Column(name) if name == column_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBound {
    pub value: LiteralValue,
    pub inclusive: bool,
}

impl RangeBound {
    pub fn inclusive(value: LiteralValue) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub fn exclusive(value: LiteralValue) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// Predicate attached to one column after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnFilter {
    /// Lower/upper bound, either side may be open.
    Range {
        operand: PredicateOperand,
        lower: Option<RangeBound>,
        upper: Option<RangeBound>,
    },
    /// Explicit membership list. Unordered, duplicates permitted.
    In {
        operand: PredicateOperand,
        values: Vec<LiteralValue>,
    },
}

impl ColumnFilter {
    /// `column = value`, the normalized form of an equality predicate.
    pub fn equal_to(column: &str, value: LiteralValue) -> Self {
        ColumnFilter::Range {
            operand: PredicateOperand::Column(column.to_string()),
            lower: Some(RangeBound::inclusive(value.clone())),
            upper: Some(RangeBound::inclusive(value)),
        }
    }

    /// `column IN (values...)`.
    pub fn in_list(column: &str, values: Vec<LiteralValue>) -> Self {
        ColumnFilter::In {
            operand: PredicateOperand::Column(column.to_string()),
            values,
        }
    }

    pub fn operand(&self) -> &PredicateOperand {
        match self {
            ColumnFilter::Range { operand, .. } => operand,
            ColumnFilter::In { operand, .. } => operand,
        }
    }
}
