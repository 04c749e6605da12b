pub mod candidate;
pub mod column_filter;
pub mod distribution_pruner;
pub mod hash_key;

mod pruner_tests;

pub use candidate::{resolve_candidates, CandidateSet};
pub use column_filter::{ColumnFilter, LiteralValue, PredicateOperand, RangeBound};
pub use distribution_pruner::{prune_table_tablets, ExplosionGuard, HashDistributionPruner};
pub use hash_key::HashDistributionKey;
