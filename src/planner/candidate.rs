//! Candidate-value resolution
//!
//! Converts the per-column filters of a query into the finite value sets the
//! pruner can enumerate. Anything that cannot be reduced to discrete values
//! resolves to `Unresolved`, which downstream treats as "scan everything for
//! this column" — never as an empty set.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::metadata::ColumnDef;
use super::column_filter::{ColumnFilter, LiteralValue};

/// Resolved value domain of one distribution column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSet {
    /// Exactly one value, from an equality predicate.
    Singleton(LiteralValue),
    /// A membership list.
    Explicit(Vec<LiteralValue>),
    /// No filter, or a filter the pruner cannot turn into discrete values.
    Unresolved,
}

impl CandidateSet {
    /// Number of values to enumerate, `None` when unbounded.
    pub fn size(&self) -> Option<usize> {
        match self {
            CandidateSet::Singleton(_) => Some(1),
            CandidateSet::Explicit(values) => Some(values.len()),
            CandidateSet::Unresolved => None,
        }
    }

    pub fn values(&self) -> &[LiteralValue] {
        match self {
            CandidateSet::Singleton(value) => std::slice::from_ref(value),
            CandidateSet::Explicit(values) => values.as_slice(),
            CandidateSet::Unresolved => &[],
        }
    }
}

/// Resolve each distribution column to its candidate set, in column order.
/// Pure function over the filter map; columns without a usable filter come
/// back `Unresolved`.
pub fn resolve_candidates(
    columns: &[ColumnDef],
    filters: &HashMap<String, ColumnFilter>,
) -> Vec<CandidateSet> {
    columns
        .iter()
        .map(|column| resolve_column(column, filters.get(&column.name)))
        .collect()
}

fn resolve_column(column: &ColumnDef, filter: Option<&ColumnFilter>) -> CandidateSet {
    let filter = match filter {
        Some(filter) => filter,
        None => return CandidateSet::Unresolved,
    };

    // A predicate on e.g. abs(col) constrains the column, but the values
    // cannot be derived without evaluating the function. Stay conservative.
    if !filter.operand().is_bare_column(&column.name) {
        return CandidateSet::Unresolved;
    }

    match filter {
        ColumnFilter::Range { lower, upper, .. } => match (lower, upper) {
            // Only a closed point range enumerates to a single value; the
            // bucket hash is not order-preserving, so a real interval cannot
            // be reduced to discrete points.
            (Some(lower), Some(upper))
                if lower.inclusive && upper.inclusive && lower.value == upper.value =>
            {
                CandidateSet::Singleton(lower.value.clone())
            }
            _ => CandidateSet::Unresolved,
        },
        ColumnFilter::In { values, .. } => {
            if values.is_empty() {
                // Malformed upstream state; fail open rather than claim the
                // predicate matches nothing.
                return CandidateSet::Unresolved;
            }
            CandidateSet::Explicit(dedup_preserving_order(values))
        }
    }
}

// Duplicates in an IN list would only inflate enumeration cost; dropping
// them also gives the explosion guard an accurate combination count.
fn dedup_preserving_order(values: &[LiteralValue]) -> Vec<LiteralValue> {
    let mut seen: HashSet<&LiteralValue> = HashSet::new();
    values.iter().filter(|v| seen.insert(*v)).cloned().collect()
}
