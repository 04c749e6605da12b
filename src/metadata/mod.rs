pub mod schema;
pub mod tablet;
pub mod types;

pub use schema::{Column, ColumnDef, Table};
pub use tablet::TabletAssignment;
pub use types::DataType;
