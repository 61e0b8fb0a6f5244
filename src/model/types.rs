//! Column type, aggregate method and table type definitions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Column types supported by silver and gold tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Timestamp,
    BigInt,
    Binary,
    Float,
    String,
    Double,
    Boolean,
}

impl SqlType {
    /// The keyword emitted into DDL
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::BigInt => "BIGINT",
            SqlType::Binary => "BINARY",
            SqlType::Float => "FLOAT",
            SqlType::String => "STRING",
            SqlType::Double => "DOUBLE",
            SqlType::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Error when parsing a column type string
#[derive(Debug, Clone)]
pub struct ParseSqlTypeError {
    pub input: String,
}

impl fmt::Display for ParseSqlTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown column type '{}'. Valid options: TIMESTAMP, BIGINT, BINARY, FLOAT, STRING, DOUBLE, BOOLEAN",
            self.input
        )
    }
}

impl std::error::Error for ParseSqlTypeError {}

impl FromStr for SqlType {
    type Err = ParseSqlTypeError;

    /// Accepts the DDL keywords plus the primitive names a schema registry
    /// (Avro) reports for the same physical types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "timestamp" | "timestamp-millis" | "timestamp-micros" => Ok(SqlType::Timestamp),
            "bigint" | "long" | "int" => Ok(SqlType::BigInt),
            "binary" | "bytes" => Ok(SqlType::Binary),
            "float" => Ok(SqlType::Float),
            "string" => Ok(SqlType::String),
            "double" => Ok(SqlType::Double),
            "boolean" => Ok(SqlType::Boolean),
            _ => Err(ParseSqlTypeError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for SqlType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SqlType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for SqlType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_sql())
    }
}

// ============================================================================
// AggregateMethod
// ============================================================================

/// How a column is carried into the gold layer.
///
/// `None` marks a dimension (grouped on verbatim); every other value marks a
/// measure that is wrapped in the matching aggregate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateMethod {
    None,
    Sum,
    Count,
    Avg,
    Min,
    Max,
    FirstValue,
    LastValue,
    AnyValue,
}

impl AggregateMethod {
    /// SQL function name, or `None` for dimensions
    pub fn function_name(&self) -> Option<&'static str> {
        match self {
            AggregateMethod::None => None,
            AggregateMethod::Sum => Some("SUM"),
            AggregateMethod::Count => Some("COUNT"),
            AggregateMethod::Avg => Some("AVG"),
            AggregateMethod::Min => Some("MIN"),
            AggregateMethod::Max => Some("MAX"),
            AggregateMethod::FirstValue => Some("FIRST_VALUE"),
            AggregateMethod::LastValue => Some("LAST_VALUE"),
            AggregateMethod::AnyValue => Some("ANY_VALUE"),
        }
    }

    pub fn is_dimension(&self) -> bool {
        matches!(self, AggregateMethod::None)
    }
}

impl Default for AggregateMethod {
    fn default() -> Self {
        AggregateMethod::None
    }
}

impl fmt::Display for AggregateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name().unwrap_or("NONE"))
    }
}

/// Error when parsing an aggregate method string
#[derive(Debug, Clone)]
pub struct ParseAggregateMethodError {
    pub input: String,
}

impl fmt::Display for ParseAggregateMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.trim().is_empty() {
            return write!(f, "Aggregate method is empty; use NONE for dimension columns");
        }
        write!(
            f,
            "Unknown aggregate method '{}'. Valid options: NONE, SUM, COUNT, AVG, MIN, MAX, FIRST_VALUE, LAST_VALUE, ANY_VALUE",
            self.input
        )
    }
}

impl std::error::Error for ParseAggregateMethodError {}

impl FromStr for AggregateMethod {
    type Err = ParseAggregateMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NONE" => Ok(AggregateMethod::None),
            "SUM" => Ok(AggregateMethod::Sum),
            "COUNT" => Ok(AggregateMethod::Count),
            "AVG" | "AVERAGE" => Ok(AggregateMethod::Avg),
            "MIN" => Ok(AggregateMethod::Min),
            "MAX" => Ok(AggregateMethod::Max),
            "FIRST_VALUE" => Ok(AggregateMethod::FirstValue),
            "LAST_VALUE" => Ok(AggregateMethod::LastValue),
            "ANY_VALUE" => Ok(AggregateMethod::AnyValue),
            _ => Err(ParseAggregateMethodError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for AggregateMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AggregateMethod::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for AggregateMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// TableType
// ============================================================================

/// Shape of the gold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableType {
    /// Slowly-changing dimension with validity bookkeeping columns
    Dim,
    /// Time-partitioned, measure-bearing fact table
    Fact,
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableType::Dim => write!(f, "dim"),
            TableType::Fact => write!(f, "fact"),
        }
    }
}

/// Error when parsing a table type flag
#[derive(Debug, Clone)]
pub struct ParseTableTypeError {
    pub input: String,
}

impl fmt::Display for ParseTableTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown table type '{}'. Valid options: dim, fact", self.input)
    }
}

impl std::error::Error for ParseTableTypeError {}

impl FromStr for TableType {
    type Err = ParseTableTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dim" | "dimension" => Ok(TableType::Dim),
            "fact" => Ok(TableType::Fact),
            _ => Err(ParseTableTypeError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for TableType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TableType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TableType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
