//! Per-call generation parameters

use regex::Regex;
use super::identifier::Identifier;
use super::naming::NamingPolicy;
use super::types::TableType;
use crate::error::GenerateError;

/// `host:port`, optionally behind `http://` or `https://`
const REGISTRY_URL_PATTERN: &str =
    r"^(https?://)?(localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|[a-zA-Z0-9.-]+)(:\d{1,5})$";

/// One line, shaped like a registry endpoint.
fn validate_registry_url(url: &str) -> Result<(), GenerateError> {
    if url.contains(['\n', '\r', '\0']) {
        return Err(GenerateError::escaping(
            "schema_registry_url",
            "line breaks would end the comment early",
        ));
    }
    let pattern = Regex::new(REGISTRY_URL_PATTERN)
        .map_err(|e| GenerateError::configuration(e.to_string()))?;
    if !pattern.is_match(url) {
        return Err(GenerateError::configuration(format!(
            "schema registry URL '{}' is not host:port (e.g. localhost:8081 or http://registry:8081)",
            url
        )));
    }
    Ok(())
}

/// Everything a generation call needs besides the columns.
///
/// The author is an explicit field; nothing is read from process-wide state.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Lower-cased physical table name
    pub table_name: Identifier,
    pub table_type: TableType,
    pub created_by: String,
    /// Only used in the documentation header
    pub schema_registry_url: Option<String>,
    pub naming: NamingPolicy,
}

impl GenerationContext {
    pub fn new(table_name: &str, table_type: TableType, created_by: impl Into<String>) -> Result<Self, GenerateError> {
        let created_by = created_by.into();
        if created_by.trim().is_empty() {
            return Err(GenerateError::configuration("author (created_by) is required"));
        }
        Ok(Self {
            table_name: Identifier::new(table_name)?.to_lowercase(),
            table_type,
            created_by,
            schema_registry_url: None,
            naming: NamingPolicy::default(),
        })
    }

    pub fn with_registry_url(mut self, url: impl Into<String>) -> Result<Self, GenerateError> {
        let url = url.into();
        validate_registry_url(&url)?;
        self.schema_registry_url = Some(url);
        Ok(self)
    }

    pub fn with_naming(mut self, naming: NamingPolicy) -> Result<Self, GenerateError> {
        naming.validate()?;
        self.naming = naming;
        Ok(self)
    }

    /// Re-check the public fields, which callers may have set directly
    pub fn validate(&self) -> Result<(), GenerateError> {
        Identifier::new(self.table_name.as_str())?;
        if self.created_by.trim().is_empty() {
            return Err(GenerateError::configuration("author (created_by) is required"));
        }
        if let Some(url) = &self.schema_registry_url {
            validate_registry_url(url)?;
        }
        self.naming.validate()
    }

    pub fn silver_table(&self) -> String {
        self.naming.silver_table(self.table_name.as_str())
    }

    pub fn gold_table_name(&self) -> String {
        self.naming.gold_table_name(self.table_name.as_str(), self.table_type)
    }

    pub fn gold_table(&self) -> String {
        self.naming.gold_table(self.table_name.as_str(), self.table_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_lowercases_table_name() {
        let ctx = GenerationContext::new("Toll_Stage", TableType::Fact, "alice").unwrap();
        assert_eq!(ctx.table_name.as_str(), "toll_stage");
        assert_eq!(ctx.gold_table(), "gold.fact_toll_stage");
        assert_eq!(ctx.gold_table_name(), "fact_toll_stage");
    }

    #[test]
    fn test_context_validation() {
        assert!(matches!(
            GenerationContext::new("bad name", TableType::Dim, "alice"),
            Err(GenerateError::Identifier { .. })
        ));
        assert!(matches!(
            GenerationContext::new("orders", TableType::Dim, "  "),
            Err(GenerateError::Configuration { .. })
        ));
    }

    #[test]
    fn test_builder_methods() {
        let ctx = GenerationContext::new("orders", TableType::Dim, "bob")
            .unwrap()
            .with_registry_url("http://registry:8081")
            .unwrap()
            .with_naming(NamingPolicy { catalog: Some("ice".into()), ..Default::default() })
            .unwrap();
        assert_eq!(ctx.schema_registry_url.as_deref(), Some("http://registry:8081"));
        assert_eq!(ctx.silver_table(), "ice.silver.orders");
        assert_eq!(ctx.gold_table(), "ice.gold.dim_orders");
    }

    #[test]
    fn test_registry_url_shapes() {
        let ctx = || GenerationContext::new("orders", TableType::Fact, "alice").unwrap();
        for ok in ["localhost:8081", "http://registry:8081", "https://10.0.0.12:9092", "sr.prod.internal:443"] {
            assert!(ctx().with_registry_url(ok).is_ok(), "{} rejected", ok);
        }
        for bad in ["registry", "http://registry", "ftp://registry:8081", "registry:8081/subjects", "x:1; DROP"] {
            assert!(
                matches!(ctx().with_registry_url(bad), Err(GenerateError::Configuration { .. })),
                "{} accepted",
                bad
            );
        }
        assert!(matches!(
            ctx().with_registry_url("registry:8081\nDROP TABLE t;"),
            Err(GenerateError::Escaping { .. })
        ));
    }

    #[test]
    fn test_validate_catches_direct_field_edits() {
        let mut ctx = GenerationContext::new("orders", TableType::Fact, "alice").unwrap();
        assert!(ctx.validate().is_ok());

        ctx.naming.gold_schema = "gold; DROP TABLE x".into();
        assert!(matches!(ctx.validate(), Err(GenerateError::Identifier { .. })));

        ctx.naming = NamingPolicy::default();
        ctx.schema_registry_url = Some("not a url".into());
        assert!(matches!(ctx.validate(), Err(GenerateError::Configuration { .. })));
    }

    #[test]
    fn test_with_naming_rejects_bad_policy() {
        let result = GenerationContext::new("orders", TableType::Fact, "alice")
            .unwrap()
            .with_naming(NamingPolicy { silver_schema: "silver.x".into(), ..Default::default() });
        assert!(matches!(result, Err(GenerateError::Identifier { .. })));
    }
}
