use serde::{Deserialize, Serialize};

/// Declared value types for columns that can participate in hash
/// distribution. The type decides the byte encoding a value contributes to
/// the bucket hash, so it must match the storage layer's declaration exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    // Integer types
    TinyInt,
    SmallInt,
    Int,
    BigInt,

    // String types
    Char { length: u32 },
    Varchar { length: u32 },
    String,

    // Date/Time
    Date,

    // Boolean
    Boolean,
}

impl DataType {
    /// Byte width an integer literal of this declared type occupies in the
    /// bucket hash. Non-integer types fall back to the widest encoding.
    pub fn integer_hash_width(&self) -> usize {
        match self {
            DataType::TinyInt => 1,
            DataType::SmallInt => 2,
            DataType::Int => 4,
            _ => 8,
        }
    }

    pub fn from_sql_type(sql_type: &str) -> Option<Self> {
        let sql_type_lower = sql_type.to_lowercase();

        match sql_type_lower.as_str() {
            "tinyint" => Some(DataType::TinyInt),
            "smallint" => Some(DataType::SmallInt),
            "int" | "integer" => Some(DataType::Int),
            "bigint" => Some(DataType::BigInt),
            "date" => Some(DataType::Date),
            "boolean" | "bool" => Some(DataType::Boolean),
            "string" => Some(DataType::String),
            _ => {
                // Handle parameterized types
                if sql_type_lower.starts_with("varchar") {
                    Some(DataType::Varchar { length: 65535 })
                } else if sql_type_lower.starts_with("char") {
                    Some(DataType::Char { length: 255 })
                } else {
                    None
                }
            }
        }
    }
}
