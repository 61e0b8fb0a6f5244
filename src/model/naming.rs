//! Naming policy for physical tables

use serde::{Deserialize, Serialize};
use super::identifier::Identifier;
use super::types::TableType;
use crate::error::GenerateError;

/// Where each layer's tables live and how gold tables are prefixed.
///
/// Defaults produce `silver.orders`, `gold.fact_orders` and a bronze source
/// of `bronze.raw`. Setting `catalog` prefixes every name (`ice.silver.orders`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamingPolicy {
    pub catalog: Option<String>,
    pub bronze_schema: String,
    pub bronze_table: String,
    pub silver_schema: String,
    pub gold_schema: String,
    pub fact_prefix: String,
    pub dim_prefix: String,
    /// Operational metadata table receiving the config upserts
    pub config_table: String,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            catalog: None,
            bronze_schema: "bronze".to_string(),
            bronze_table: "raw".to_string(),
            silver_schema: "silver".to_string(),
            gold_schema: "gold".to_string(),
            fact_prefix: "fact_".to_string(),
            dim_prefix: "dim_".to_string(),
            config_table: "etl_table_config".to_string(),
        }
    }
}

impl NamingPolicy {
    /// Every name here is spliced into statements unquoted, so each must be
    /// a plain identifier. Prefixes may be empty; `config_table` may be
    /// schema-qualified.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if let Some(catalog) = self.catalog.as_deref().filter(|c| !c.is_empty()) {
            Identifier::new(catalog)?;
        }
        for name in [
            &self.bronze_schema,
            &self.bronze_table,
            &self.silver_schema,
            &self.gold_schema,
        ] {
            Identifier::new(name.as_str())?;
        }
        for prefix in [&self.fact_prefix, &self.dim_prefix] {
            if !prefix.is_empty() {
                Identifier::new(prefix.as_str())?;
            }
        }
        for part in self.config_table.split('.') {
            Identifier::new(part)?;
        }
        Ok(())
    }

    fn qualify(&self, schema: &str, table: &str) -> String {
        match &self.catalog {
            Some(catalog) if !catalog.is_empty() => format!("{}.{}.{}", catalog, schema, table),
            _ => format!("{}.{}", schema, table),
        }
    }

    pub fn bronze_source(&self) -> String {
        self.qualify(&self.bronze_schema, &self.bronze_table)
    }

    pub fn silver_table(&self, table: &str) -> String {
        self.qualify(&self.silver_schema, table)
    }

    /// Unqualified gold table name: `fact_orders` / `dim_orders`
    pub fn gold_table_name(&self, table: &str, table_type: TableType) -> String {
        let prefix = match table_type {
            TableType::Fact => &self.fact_prefix,
            TableType::Dim => &self.dim_prefix,
        };
        format!("{}{}", prefix, table)
    }

    pub fn gold_table(&self, table: &str, table_type: TableType) -> String {
        self.qualify(&self.gold_schema, &self.gold_table_name(table, table_type))
    }
}
