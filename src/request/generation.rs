use serde::{Deserialize, Serialize};
use crate::error::GenerateError;
use crate::generator::{generate, GeneratedArtifact};
use crate::model::{
    validate_columns, ColumnDescriptor, ColumnSpec, GenerationContext, NamingPolicy, TableType,
};

/// Request body for a generation call
///
/// Strings are kept raw so that a bad table type or column surfaces as a
/// configuration error naming the field, not as a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub table_type: String,
    #[serde(default, alias = "createdBy")]
    pub author: String,
    #[serde(default)]
    pub registry_url: Option<String>,
    #[serde(default)]
    pub naming: NamingPolicy,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl GenerationRequest {
    pub fn context(&self) -> Result<GenerationContext, GenerateError> {
        if self.table_name.trim().is_empty() {
            return Err(GenerateError::configuration("tableName is required"));
        }
        let table_type = self
            .table_type
            .parse::<TableType>()
            .map_err(|e| GenerateError::configuration(e.to_string()))?;

        let mut ctx = GenerationContext::new(self.table_name.trim(), table_type, self.author.clone())?
            .with_naming(self.naming.clone())?;
        if let Some(url) = self.registry_url.as_deref().filter(|u| !u.trim().is_empty()) {
            ctx = ctx.with_registry_url(url.trim())?;
        }
        Ok(ctx)
    }

    pub fn columns(&self) -> Result<Vec<ColumnDescriptor>, GenerateError> {
        validate_columns(&self.columns)
    }

    /// Validate the whole request, then run the pipeline
    pub fn generate(&self) -> Result<GeneratedArtifact, GenerateError> {
        let ctx = self.context()?;
        let columns = self.columns()?;
        generate(&ctx, &columns)
    }
}
