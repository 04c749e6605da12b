//! Tablet-to-bucket assignment snapshot
//!
//! Immutable view of which tablet owns each bucket ordinal of a table at
//! planning time, taken from partition metadata. May be sparse when earlier
//! planner stages already ruled out some ordinals.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabletAssignment {
    bucket_count: u32,
    /// Bucket ordinal -> owning tablet id. Keys are a subset of
    /// `0..bucket_count`.
    tablets: BTreeMap<u32, i64>,
}

impl TabletAssignment {
    pub fn new(bucket_count: u32, tablets: BTreeMap<u32, i64>) -> Result<Self> {
        if bucket_count == 0 {
            return Err(PlannerError::InvalidTabletAssignment(
                "bucket count must be positive".to_string(),
            ));
        }
        if let Some(&ordinal) = tablets.keys().find(|&&o| o >= bucket_count) {
            return Err(PlannerError::InvalidTabletAssignment(format!(
                "bucket ordinal {} out of range 0..{}",
                ordinal, bucket_count
            )));
        }
        Ok(Self {
            bucket_count,
            tablets,
        })
    }

    /// Dense assignment: tablet ids in bucket-ordinal order, one per bucket.
    pub fn from_tablet_ids(tablet_ids: Vec<i64>) -> Result<Self> {
        let bucket_count = u32::try_from(tablet_ids.len()).map_err(|_| {
            PlannerError::InvalidTabletAssignment("too many buckets".to_string())
        })?;
        let tablets = tablet_ids
            .into_iter()
            .enumerate()
            .map(|(ordinal, id)| (ordinal as u32, id))
            .collect();
        Self::new(bucket_count, tablets)
    }

    pub fn bucket_count(&self) -> u32 {
        self.bucket_count
    }

    pub fn tablet_for_bucket(&self, ordinal: u32) -> Option<i64> {
        self.tablets.get(&ordinal).copied()
    }

    /// Every tablet in the assignment, deduplicated. This is the fail-open
    /// fallback result when pruning cannot prove a smaller subset.
    pub fn all_tablets(&self) -> BTreeSet<i64> {
        self.tablets.values().copied().collect()
    }

    pub fn tablet_count(&self) -> usize {
        self.all_tablets().len()
    }
}
