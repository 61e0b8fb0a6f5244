//! Dimension / measure partitioning

use log::debug;
use serde::Serialize;
use crate::error::GenerateError;
use crate::model::{check_not_reserved, validate_columns, ColumnDescriptor, ColumnSpec};

/// Columns split into dimensions and measures, in input order.
///
/// `projections` interleaves both buckets exactly as the input did: bare
/// names for dimensions, `AGG(name) AS name` for measures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub dimension_definitions: Vec<String>,
    pub measure_definitions: Vec<String>,
    pub dimension_names: Vec<String>,
    pub projections: Vec<String>,
}

impl ClassificationResult {
    pub fn column_count(&self) -> usize {
        self.dimension_definitions.len() + self.measure_definitions.len()
    }

    pub fn has_dimensions(&self) -> bool {
        !self.dimension_names.is_empty()
    }

    pub fn has_measures(&self) -> bool {
        !self.measure_definitions.is_empty()
    }
}

/// `AGG(name) AS name`; the alias is always the bare column name
fn aggregate_projection(function: &str, column: &ColumnDescriptor) -> String {
    format!("{}({}) AS {}", function, column.name, column.name)
}

/// Partition already-validated columns in a single stable pass.
pub fn classify(columns: &[ColumnDescriptor]) -> Result<ClassificationResult, GenerateError> {
    if columns.is_empty() {
        return Err(GenerateError::configuration("schema has no columns"));
    }

    let mut result = ClassificationResult::default();

    for column in columns {
        check_not_reserved(&column.name)?;
        match column.aggregate_method.function_name() {
            None => {
                result.dimension_definitions.push(column.definition());
                result.dimension_names.push(column.name.to_string());
                result.projections.push(column.name.to_string());
            }
            Some(function) => {
                result.measure_definitions.push(column.definition());
                result.projections.push(aggregate_projection(function, column));
            }
        }
    }

    debug!(
        "classified {} columns: {} dimensions, {} measures",
        columns.len(),
        result.dimension_definitions.len(),
        result.measure_definitions.len()
    );

    Ok(result)
}

/// Validate raw column specs, then classify.
///
/// Any invalid spec aborts the whole call before classification starts.
pub fn classify_specs(specs: &[ColumnSpec]) -> Result<ClassificationResult, GenerateError> {
    let columns = validate_columns(specs)?;
    classify(&columns)
}
