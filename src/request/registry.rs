//! Schema registry lookup results

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use super::generation::GenerationRequest;
use crate::error::GenerateError;
use crate::model::{AggregateMethod, ColumnSpec, NamingPolicy, TableType};

/// One field reported by the registry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// What a schema-registry fetch returns: table name, fields, source URL
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySchema {
    pub table_name: String,
    pub schema_map: Vec<RegistryField>,
    #[serde(default)]
    pub registry_url: Option<String>,
}

impl RegistrySchema {
    /// Build a request where every field is a dimension unless `measures`
    /// names it with an aggregate method.
    ///
    /// Overrides naming a field the registry did not report are rejected.
    pub fn into_request(
        self,
        table_type: TableType,
        author: impl Into<String>,
        measures: &HashMap<String, AggregateMethod>,
    ) -> Result<GenerationRequest, GenerateError> {
        if let Some(unknown) = measures
            .keys()
            .find(|name| !self.schema_map.iter().any(|f| &f.name == *name))
        {
            return Err(GenerateError::configuration(format!(
                "measure override '{}' does not match any registry field",
                unknown
            )));
        }

        let columns = self
            .schema_map
            .iter()
            .map(|field| {
                let method = measures.get(&field.name).copied().unwrap_or_default();
                ColumnSpec::new(field.name.as_str(), field.field_type.as_str(), method.to_string())
            })
            .collect();

        Ok(GenerationRequest {
            table_name: self.table_name,
            table_type: table_type.to_string(),
            author: author.into(),
            registry_url: self.registry_url,
            naming: NamingPolicy::default(),
            columns,
        })
    }
}
