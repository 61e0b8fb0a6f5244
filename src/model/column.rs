//! Column descriptors

use serde::{Deserialize, Serialize};
use super::identifier::Identifier;
use super::types::{AggregateMethod, SqlType};
use crate::error::GenerateError;

/// A validated input column: name, DDL type and how it reaches the gold layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: Identifier,
    pub sql_type: SqlType,
    pub aggregate_method: AggregateMethod,
}

impl ColumnDescriptor {
    pub fn new(name: Identifier, sql_type: SqlType, aggregate_method: AggregateMethod) -> Self {
        Self { name, sql_type, aggregate_method }
    }

    /// Shorthand for a dimension column
    pub fn dimension(name: &str, sql_type: SqlType) -> Result<Self, GenerateError> {
        Ok(Self::new(Identifier::new(name)?, sql_type, AggregateMethod::None))
    }

    /// Shorthand for a measure column
    pub fn measure(name: &str, sql_type: SqlType, method: AggregateMethod) -> Result<Self, GenerateError> {
        if method.is_dimension() {
            return Err(GenerateError::configuration(format!(
                "measure column '{}' needs an aggregate method other than NONE",
                name
            )));
        }
        Ok(Self::new(Identifier::new(name)?, sql_type, method))
    }

    pub fn is_dimension(&self) -> bool {
        self.aggregate_method.is_dimension()
    }

    /// `"{name} {TYPE}"` as it appears in a column list
    pub fn definition(&self) -> String {
        format!("{} {}", self.name, self.sql_type)
    }
}

/// Columns the silver and gold tables add on their own: the bronze offset,
/// the hourly partitions and the SCD bookkeeping
pub const RESERVED_COLUMNS: [&str; 9] = [
    "offset",
    "year",
    "month",
    "day",
    "hour",
    "scd_valid_from",
    "scd_valid_to",
    "is_active",
    "processing_timestamp",
];

/// An input column may not reuse a generated column's name (in any case).
pub fn check_not_reserved(name: &Identifier) -> Result<(), GenerateError> {
    match RESERVED_COLUMNS
        .iter()
        .find(|reserved| reserved.eq_ignore_ascii_case(name.as_str()))
    {
        Some(reserved) => Err(GenerateError::configuration(format!(
            "column '{}' clashes with the generated '{}' column",
            name, reserved
        ))),
        None => Ok(()),
    }
}

/// A column as it arrives from a form or a request file: free-form strings.
///
/// `ColumnSpec::validate` turns it into a `ColumnDescriptor` or fails with a
/// configuration/identifier error naming the offending column.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ColumnSpec {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub sql_type: String,
    #[serde(rename = "aggregate", alias = "aggregateMethod", default)]
    pub aggregate_method: String,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>, aggregate_method: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            aggregate_method: aggregate_method.into(),
        }
    }

    pub fn validate(&self) -> Result<ColumnDescriptor, GenerateError> {
        if self.name.trim().is_empty() {
            return Err(GenerateError::configuration("column name is missing"));
        }
        if self.sql_type.trim().is_empty() {
            return Err(GenerateError::configuration(format!(
                "column '{}' has no type",
                self.name
            )));
        }

        let name = Identifier::new(self.name.trim())?;
        let sql_type = self.sql_type.parse::<SqlType>().map_err(|e| {
            GenerateError::configuration(format!("column '{}': {}", self.name, e))
        })?;
        let aggregate_method = self.aggregate_method.parse::<AggregateMethod>().map_err(|e| {
            GenerateError::configuration(format!("column '{}': {}", self.name, e))
        })?;

        Ok(ColumnDescriptor::new(name, sql_type, aggregate_method))
    }
}

impl From<&ColumnDescriptor> for ColumnSpec {
    fn from(col: &ColumnDescriptor) -> Self {
        ColumnSpec::new(
            col.name.as_str(),
            col.sql_type.as_sql(),
            col.aggregate_method.to_string(),
        )
    }
}

/// Validate every spec, failing on the first bad column.
///
/// Duplicate names are rejected since each output column must map back to
/// exactly one input column.
pub fn validate_columns(specs: &[ColumnSpec]) -> Result<Vec<ColumnDescriptor>, GenerateError> {
    if specs.is_empty() {
        return Err(GenerateError::configuration("schema has no columns"));
    }

    let mut columns: Vec<ColumnDescriptor> = Vec::with_capacity(specs.len());
    for spec in specs {
        let col = spec.validate()?;
        check_not_reserved(&col.name)?;
        if columns
            .iter()
            .any(|c| c.name.as_str().eq_ignore_ascii_case(col.name.as_str()))
        {
            return Err(GenerateError::configuration(format!(
                "column '{}' is defined more than once",
                col.name
            )));
        }
        columns.push(col);
    }
    Ok(columns)
}
