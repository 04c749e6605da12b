use serde::{Deserialize, Serialize};
use super::types::DataType;
use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl ColumnDef {
    pub fn new(name: String, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

// Alias for easier usage
pub type Column = ColumnDef;

/// Table schema as seen by the planner. `distribution_keys` is the ordered
/// list of columns the storage layer hashed rows by; the order must match
/// the order used at placement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub distribution_keys: Vec<String>,
}

impl Table {
    pub fn new(name: String) -> Self {
        Self {
            name,
            columns: Vec::new(),
            distribution_keys: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn with_distribution_keys(mut self, keys: Vec<String>) -> Self {
        self.distribution_keys = keys;
        self
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Resolve the distribution keys to their column definitions, in key
    /// order. Fails if a key names a column the table does not have.
    pub fn distribution_columns(&self) -> Result<Vec<ColumnDef>> {
        self.distribution_keys
            .iter()
            .map(|key| {
                self.get_column(key)
                    .cloned()
                    .ok_or_else(|| PlannerError::UnknownDistributionColumn {
                        table: self.name.clone(),
                        column: key.clone(),
                    })
            })
            .collect()
    }
}
