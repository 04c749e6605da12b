// Library exports for tablet-pruner
// Hash-distribution tablet pruning for the query planner

pub mod config;
pub mod error;
pub mod metadata;
pub mod planner;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use metadata::{Column, ColumnDef, DataType, Table, TabletAssignment};
pub use planner::{
    prune_table_tablets, ColumnFilter, HashDistributionKey, HashDistributionPruner, LiteralValue,
};
