//! Whole-pipeline entry point
//!
//! Classifier → {silver DDL, gold DDL} → transform query → {silver row, gold row}.
//! Every stage is a pure function of the previous ones; the first failure
//! aborts the call and nothing partial is returned.

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use crate::classifier::{classify, ClassificationResult};
use crate::config_row::{build_gold_config_row, build_silver_config_row, Layer};
use crate::ddl::{build_gold_ddl, build_silver_ddl};
use crate::error::GenerateError;
use crate::model::{validate_columns, ColumnDescriptor, ColumnSpec, GenerationContext};
use crate::transform::build_transform_sql;
use super::header::render_header;

/// Everything one generation call produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub silver_ddl: String,
    pub gold_ddl: String,
    pub transform_sql: String,
    pub silver_config_row: String,
    pub gold_config_row: String,
    /// Documentation banners; the only timestamped output
    pub silver_header: String,
    pub gold_header: String,
}

impl GeneratedArtifact {
    /// Header followed by the silver upsert, ready to write to a .sql file
    pub fn silver_config_script(&self) -> String {
        format!("{}\n{}\n", self.silver_header, self.silver_config_row)
    }

    pub fn gold_config_script(&self) -> String {
        format!("{}\n{}\n", self.gold_header, self.gold_config_row)
    }
}

/// Run the pipeline with the current time in the headers
pub fn generate(ctx: &GenerationContext, columns: &[ColumnDescriptor]) -> Result<GeneratedArtifact, GenerateError> {
    generate_at(ctx, columns, &Utc::now())
}

/// Validate raw column specs, then run the pipeline
pub fn generate_from_specs(ctx: &GenerationContext, specs: &[ColumnSpec]) -> Result<GeneratedArtifact, GenerateError> {
    let columns = validate_columns(specs)?;
    generate(ctx, &columns)
}

pub fn generate_at(
    ctx: &GenerationContext,
    columns: &[ColumnDescriptor],
    generated_at: &DateTime<Utc>,
) -> Result<GeneratedArtifact, GenerateError> {
    ctx.validate()?;
    let classification = classify(columns)?;
    let artifact = generate_classified(ctx, &classification, generated_at)?;

    info!(
        "generated {} ({}) from {} columns",
        ctx.gold_table(),
        ctx.table_type,
        columns.len()
    );

    Ok(artifact)
}

fn generate_classified(
    ctx: &GenerationContext,
    classification: &ClassificationResult,
    generated_at: &DateTime<Utc>,
) -> Result<GeneratedArtifact, GenerateError> {
    let silver_ddl = build_silver_ddl(ctx, classification)?;
    let gold_ddl = build_gold_ddl(ctx, classification)?;
    let transform_sql = build_transform_sql(ctx, classification)?;

    let silver_config_row = build_silver_config_row(ctx, &silver_ddl, classification)?;
    let gold_config_row = build_gold_config_row(ctx, &gold_ddl, &transform_sql, classification)?;

    let field_count = classification.column_count();
    let silver_header = render_header(ctx, Layer::Silver, field_count, generated_at)?;
    let gold_header = render_header(ctx, Layer::Gold, field_count, generated_at)?;

    Ok(GeneratedArtifact {
        silver_ddl,
        gold_ddl,
        transform_sql,
        silver_config_row,
        gold_config_row,
        silver_header,
        gold_header,
    })
}
