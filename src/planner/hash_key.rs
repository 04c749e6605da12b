//! Composite distribution key and bucket hash
//!
//! `HashDistributionKey` accumulates one (value, declared type) entry per
//! distribution column and hashes its current contents the same way the
//! storage layer hashed rows at placement time. Planner and storage share
//! this contract; if they ever diverge, pruning silently drops live tablets,
//! so the byte layout below is versioned and must not change independently.
//!
//! Bucket hash contract, version 1:
//!   hash   = CRC32 (IEEE/zlib polynomial) over the concatenation of each
//!            entry's encoded bytes, in push order (order-sensitive);
//!   bucket = hash % bucket_count.
//!
//! Per-entry encoding:
//!   - integer literal: little-endian, width taken from the declared type
//!     (1/2/4/8 bytes for TinyInt/SmallInt/Int/BigInt, 8 bytes otherwise);
//!   - date literal:    day count as little-endian i32;
//!   - string literal:  raw UTF-8 bytes, whatever the declared type — a
//!     string-form date predicate hashes as text, matching placement;
//!   - boolean literal: one byte, 0 or 1.

use crc32fast::Hasher;

use crate::metadata::DataType;
use super::column_filter::LiteralValue;

#[derive(Debug, Default)]
pub struct HashDistributionKey {
    entries: Vec<(LiteralValue, DataType)>,
}

impl HashDistributionKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_column(&mut self, value: LiteralValue, data_type: DataType) {
        self.entries.push((value, data_type));
    }

    pub fn pop_column(&mut self) {
        self.entries.pop();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket hash over the currently pushed entries.
    pub fn hash_value(&self) -> u32 {
        let mut hasher = Hasher::new();
        for (value, data_type) in &self.entries {
            update_hash(&mut hasher, value, data_type);
        }
        hasher.finalize()
    }
}

fn update_hash(hasher: &mut Hasher, value: &LiteralValue, data_type: &DataType) {
    match value {
        LiteralValue::String(s) => hasher.update(s.as_bytes()),
        LiteralValue::Int(v) => {
            let bytes = v.to_le_bytes();
            hasher.update(&bytes[..data_type.integer_hash_width()]);
        }
        LiteralValue::Date { days } => hasher.update(&days.to_le_bytes()),
        LiteralValue::Boolean(b) => hasher.update(&[*b as u8]),
    }
}
