//! DDL synthesizer (verb module)
//!
//! ClassificationResult → CREATE TABLE statements for silver and gold.

mod build;

pub use build::{build_gold_ddl, build_silver_ddl, gold_table, silver_table, SCD_COLUMNS, TIME_PARTITIONS};
