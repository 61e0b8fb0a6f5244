//! ETL config table registration rows
//!
//! Each row is an upsert keyed on `(layer, source_table_name)`, so running
//! generation again for the same table refreshes the existing registration
//! instead of adding a second one.

use log::debug;
use crate::classifier::ClassificationResult;
use crate::ddl::TIME_PARTITIONS;
use crate::emitter::emit_upsert;
use crate::error::GenerateError;
use crate::model::{GenerationContext, TableType};
use crate::statement::{SqlValue, Upsert};

/// Conflict target of every registration row
pub const CONFLICT_KEY: [&str; 2] = ["layer", "source_table_name"];

const SILVER_BATCH_SIZE: i64 = 10_000;
const PROCESSING_INTERVAL_MINUTES: i64 = 60;
const PROCESSING_MODE: &str = "batch";

/// Pipeline layer a registration row drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Silver,
    Gold,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Silver => "silver",
            Layer::Gold => "gold",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn partition_spec(table_type: TableType) -> String {
    match table_type {
        TableType::Fact => TIME_PARTITIONS.join(","),
        TableType::Dim => String::new(),
    }
}

fn primary_key_columns(classification: &ClassificationResult) -> SqlValue {
    if classification.has_dimensions() {
        SqlValue::text(classification.dimension_names.join(","))
    } else {
        SqlValue::Null
    }
}

fn with_audit_columns(upsert: Upsert, ctx: &GenerationContext) -> Upsert {
    upsert
        .value("created_by", ctx.created_by.as_str())
        .value("updated_by", ctx.created_by.as_str())
        .value("created_at", SqlValue::current_timestamp())
        .value("updated_at", SqlValue::current_timestamp())
}

/// Registration row for `bronze → silver`
pub fn silver_config_row(ctx: &GenerationContext, ddl: &str, classification: &ClassificationResult) -> Upsert {
    let table = ctx.table_name.as_str();

    let upsert = Upsert::new(ctx.naming.config_table.as_str())
        .value("layer", Layer::Silver.as_str())
        .value("source_table_name", table)
        .value("target_table_name", table)
        .value("source_table_full_name", ctx.naming.bronze_source())
        .value("target_table_full_name", ctx.silver_table())
        .value("target_table_ddl", ddl)
        .value("target_partition_spec", partition_spec(ctx.table_type))
        .value("primary_key_columns", primary_key_columns(classification))
        .value("order_by_column", "offset")
        .value("order_by_direction", "DESC")
        .value("enabled", true)
        .value("batch_size", SILVER_BATCH_SIZE)
        .value("processing_interval_minutes", PROCESSING_INTERVAL_MINUTES)
        .value("processing_mode", PROCESSING_MODE)
        .value(
            "description",
            format!(
                "Silver table for {} - cleaned and deduped from Bronze",
                ctx.table_name.to_uppercase()
            ),
        )
        .value("tags", format!("silver,{},hourly", ctx.table_type));

    with_audit_columns(upsert, ctx)
        .on_conflict(&CONFLICT_KEY)
        .update_from_excluded(&[
            "target_table_name",
            "source_table_full_name",
            "target_table_full_name",
            "target_table_ddl",
            "target_partition_spec",
            "primary_key_columns",
            "updated_by",
        ])
        .update("updated_at", SqlValue::current_timestamp())
}

/// Registration row for `silver → gold`, carrying the transform query
pub fn gold_config_row(
    ctx: &GenerationContext,
    ddl: &str,
    transform_sql: &str,
    classification: &ClassificationResult,
) -> Upsert {
    let table = ctx.table_name.as_str();
    let silver = ctx.silver_table();

    let (description, tags) = match ctx.table_type {
        TableType::Fact => (
            format!("Gold fact table - aggregated metrics from {}", table),
            "gold,fact,aggregation,hourly",
        ),
        TableType::Dim => (
            format!("Gold dimension table - conformed attributes from {}", table),
            "gold,dim,scd,hourly",
        ),
    };

    let upsert = Upsert::new(ctx.naming.config_table.as_str())
        .value("layer", Layer::Gold.as_str())
        .value("source_table_name", table)
        .value("target_table_name", ctx.gold_table_name())
        .value("source_table_full_name", silver.as_str())
        .value("target_table_full_name", ctx.gold_table())
        .value("target_table_ddl", ddl)
        .value("target_partition_spec", partition_spec(ctx.table_type))
        .value("primary_key_columns", primary_key_columns(classification))
        .value("transform_sql", transform_sql)
        .value("enabled", true)
        .value("batch_size", SqlValue::Null)
        .value("processing_interval_minutes", PROCESSING_INTERVAL_MINUTES)
        .value("processing_mode", PROCESSING_MODE)
        .value("depends_on_tables", silver.as_str())
        .value("description", description)
        .value("tags", tags);

    with_audit_columns(upsert, ctx)
        .on_conflict(&CONFLICT_KEY)
        .update_from_excluded(&[
            "target_table_name",
            "source_table_full_name",
            "target_table_full_name",
            "target_table_ddl",
            "target_partition_spec",
            "primary_key_columns",
            "transform_sql",
            "depends_on_tables",
            "updated_by",
        ])
        .update("updated_at", SqlValue::current_timestamp())
}

pub fn build_silver_config_row(
    ctx: &GenerationContext,
    ddl: &str,
    classification: &ClassificationResult,
) -> Result<String, GenerateError> {
    let sql = emit_upsert(&silver_config_row(ctx, ddl, classification))?;
    debug!("silver config row for '{}': {} bytes", ctx.table_name, sql.len());
    Ok(sql)
}

pub fn build_gold_config_row(
    ctx: &GenerationContext,
    ddl: &str,
    transform_sql: &str,
    classification: &ClassificationResult,
) -> Result<String, GenerateError> {
    let sql = emit_upsert(&gold_config_row(ctx, ddl, transform_sql, classification))?;
    debug!("gold config row for '{}': {} bytes", ctx.table_name, sql.len());
    Ok(sql)
}
