//! Hash-distribution tablet pruning
//!
//! Enumerates the candidate-value combinations of a table's distribution
//! columns, hashes each combination the way the storage layer assigned
//! buckets, and keeps only the tablets those buckets map to. Whenever a safe
//! subset cannot be proven cheaply, the full tablet set is returned: pruning
//! trades efficiency only, never correctness.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::error::Result;
use crate::metadata::{ColumnDef, Table, TabletAssignment};
use super::candidate::{resolve_candidates, CandidateSet};
use super::column_filter::ColumnFilter;
use super::hash_key::HashDistributionKey;

/// Bounds the number of value combinations enumerated per pruning call.
/// Keeps worst-case planning latency predictable; rejecting is always safe
/// because the caller falls back to scanning every tablet.
#[derive(Debug, Clone, Copy)]
pub struct ExplosionGuard {
    ceiling: usize,
}

impl ExplosionGuard {
    pub fn new(ceiling: usize) -> Self {
        Self { ceiling }
    }

    /// Whether enumerating the cartesian product of the candidate sets is
    /// feasible. An `Unresolved` set counts as unbounded.
    pub fn admits(&self, candidates: &[CandidateSet]) -> bool {
        let mut combinations: usize = 1;
        for candidate in candidates {
            let size = match candidate.size() {
                Some(size) => size,
                None => return false,
            };
            combinations = match combinations.checked_mul(size) {
                Some(product) if product <= self.ceiling => product,
                _ => return false,
            };
        }
        true
    }
}

/// One pruning invocation over immutable snapshots of schema, filters, and
/// tablet assignment. Nothing is shared or retained across calls, so
/// concurrently planned queries need no coordination.
pub struct HashDistributionPruner<'a> {
    columns: &'a [ColumnDef],
    filters: &'a HashMap<String, ColumnFilter>,
    assignment: &'a TabletAssignment,
    guard: ExplosionGuard,
}

impl<'a> HashDistributionPruner<'a> {
    pub fn new(
        columns: &'a [ColumnDef],
        filters: &'a HashMap<String, ColumnFilter>,
        assignment: &'a TabletAssignment,
        max_combinations: usize,
    ) -> Self {
        Self {
            columns,
            filters,
            assignment,
            guard: ExplosionGuard::new(max_combinations),
        }
    }

    /// Tablets that could hold rows matching the filters. Always a superset
    /// of the tablets that actually do.
    pub fn prune(&self) -> BTreeSet<i64> {
        let candidates = resolve_candidates(self.columns, self.filters);
        if !self.guard.admits(&candidates) {
            debug!(
                "tablet pruning skipped: candidate combinations unresolved or over ceiling, \
                 scanning all {} tablets",
                self.assignment.tablet_count()
            );
            return self.assignment.all_tablets();
        }

        let total_tablets = self.assignment.tablet_count();
        let mut result = BTreeSet::new();
        let mut key = HashDistributionKey::new();
        self.enumerate(0, &candidates, &mut key, &mut result, total_tablets);

        debug!(
            "tablet pruning retained {} of {} tablets",
            result.len(),
            total_tablets
        );
        result
    }

    /// Depth-first walk of the cartesian product, one column per level in
    /// distribution-key order. Push/pop is scoped to the loop body, so no
    /// partial key state leaks across sibling branches.
    fn enumerate(
        &self,
        depth: usize,
        candidates: &[CandidateSet],
        key: &mut HashDistributionKey,
        result: &mut BTreeSet<i64>,
        total_tablets: usize,
    ) {
        if depth == self.columns.len() {
            let bucket = key.hash_value() % self.assignment.bucket_count();
            if let Some(tablet) = self.assignment.tablet_for_bucket(bucket) {
                result.insert(tablet);
            }
            return;
        }

        let column = &self.columns[depth];
        for value in candidates[depth].values() {
            key.push_column(value.clone(), column.data_type.clone());
            self.enumerate(depth + 1, candidates, key, result, total_tablets);
            key.pop_column();

            // Already covering every tablet; the remaining combinations
            // cannot change the result.
            if result.len() >= total_tablets {
                return;
            }
        }
    }
}

/// Prune a table's tablets by resolving its distribution keys first. Fails
/// only when the schema's distribution keys do not name real columns.
pub fn prune_table_tablets(
    table: &Table,
    filters: &HashMap<String, ColumnFilter>,
    assignment: &TabletAssignment,
    max_combinations: usize,
) -> Result<BTreeSet<i64>> {
    let columns = table.distribution_columns()?;
    Ok(HashDistributionPruner::new(&columns, filters, assignment, max_combinations).prune())
}
