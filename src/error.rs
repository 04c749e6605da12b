use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("unknown distribution column '{column}' in table '{table}'")]
    UnknownDistributionColumn { table: String, column: String },

    #[error("invalid tablet assignment: {0}")]
    InvalidTabletAssignment(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
