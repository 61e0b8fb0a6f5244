//! CREATE TABLE synthesis for the silver and gold layers

use log::debug;
use crate::classifier::ClassificationResult;
use crate::emitter::emit_create_table;
use crate::error::GenerateError;
use crate::model::{GenerationContext, TableType};
use crate::statement::CreateTable;

/// Hourly partition columns shared by silver and fact tables
pub const TIME_PARTITIONS: [&str; 4] = ["year", "month", "day", "hour"];

const TIME_PARTITION_DEFINITIONS: [&str; 4] = [
    "year STRING",
    "month STRING",
    "day STRING",
    "hour STRING",
];

/// Slowly-changing-dimension bookkeeping columns on gold dimension tables
pub const SCD_COLUMNS: [&str; 4] = [
    "scd_valid_from TIMESTAMP",
    "scd_valid_to TIMESTAMP",
    "is_active BOOLEAN",
    "processing_timestamp TIMESTAMP",
];

const COMPRESSION_CODEC: &str = "snappy";
const SILVER_TARGET_FILE_SIZE: u64 = 128 * 1024 * 1024;
const GOLD_TARGET_FILE_SIZE: u64 = 256 * 1024 * 1024;

fn with_storage_properties(table: CreateTable, target_file_size: u64) -> CreateTable {
    table
        .with_property("write.parquet.compression-codec", COMPRESSION_CODEC)
        .with_property("write.target-file-size-bytes", target_file_size.to_string())
}

/// Build the silver node: every input column, then the bronze offset and the
/// hourly partition columns. Only fact tables are time-partitioned.
pub fn silver_table(ctx: &GenerationContext, classification: &ClassificationResult) -> CreateTable {
    let mut table = CreateTable::new(ctx.silver_table())
        .with_column_block(&classification.dimension_definitions)
        .with_column_block(&classification.measure_definitions)
        .with_columns(&["offset BIGINT"])
        .with_columns(&TIME_PARTITION_DEFINITIONS);

    if ctx.table_type == TableType::Fact {
        table = table.with_partitions(&TIME_PARTITIONS);
    }

    with_storage_properties(table, SILVER_TARGET_FILE_SIZE)
}

/// Build the gold node: `fact_` tables carry partition columns,
/// `dim_` tables carry SCD bookkeeping instead.
pub fn gold_table(ctx: &GenerationContext, classification: &ClassificationResult) -> CreateTable {
    let table = CreateTable::new(ctx.gold_table())
        .with_column_block(&classification.dimension_definitions)
        .with_column_block(&classification.measure_definitions);

    let table = match ctx.table_type {
        TableType::Fact => table
            .with_columns(&TIME_PARTITION_DEFINITIONS)
            .with_partitions(&TIME_PARTITIONS),
        TableType::Dim => table.with_columns(&SCD_COLUMNS),
    };

    with_storage_properties(table, GOLD_TARGET_FILE_SIZE)
}

pub fn build_silver_ddl(ctx: &GenerationContext, classification: &ClassificationResult) -> Result<String, GenerateError> {
    let ddl = emit_create_table(&silver_table(ctx, classification))?;
    debug!("silver DDL for '{}': {} bytes", ctx.table_name, ddl.len());
    Ok(ddl)
}

pub fn build_gold_ddl(ctx: &GenerationContext, classification: &ClassificationResult) -> Result<String, GenerateError> {
    let ddl = emit_create_table(&gold_table(ctx, classification))?;
    debug!("gold DDL for '{}': {} bytes", ctx.table_name, ddl.len());
    Ok(ddl)
}
