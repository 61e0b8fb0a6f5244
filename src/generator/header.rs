//! Documentation banner placed above generated config rows

use chrono::{DateTime, Utc};
use crate::config_row::Layer;
use crate::error::GenerateError;
use crate::model::GenerationContext;

const RULE: &str = "-- ============================================================================";

/// Text embedded in a `--` comment must stay on one line.
fn comment_text(field: &str, value: &str) -> Result<String, GenerateError> {
    if value.contains(['\n', '\r', '\0']) {
        return Err(GenerateError::escaping(
            field,
            "line breaks would end the comment early",
        ));
    }
    Ok(value.to_string())
}

/// Informational header; not parsed by anything downstream.
///
/// The timestamp is passed in so callers control the only non-deterministic
/// part of the output.
pub fn render_header(
    ctx: &GenerationContext,
    layer: Layer,
    field_count: usize,
    generated_at: &DateTime<Utc>,
) -> Result<String, GenerateError> {
    let registry = match &ctx.schema_registry_url {
        Some(url) => comment_text("schema_registry_url", url)?,
        None => "n/a".to_string(),
    };
    let bronze_table = comment_text("bronze_table", &ctx.naming.bronze_table)?;
    let table = ctx.table_name.to_uppercase();

    Ok([
        RULE.to_string(),
        format!("-- {} LAYER CONFIG - {}", layer.as_str().to_uppercase(), table),
        format!("-- Generated at: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        format!("-- Schema Registry: {}", registry),
        format!("-- Subject: {}-{}", bronze_table, table),
        format!("-- Total fields: {}", field_count),
        RULE.to_string(),
    ]
    .join("\n"))
}
