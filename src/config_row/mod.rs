//! Config row synthesizer (verb module)
//!
//! DDL + transform SQL → idempotent `etl_table_config` upserts.

mod build;

pub use build::{
    build_gold_config_row, build_silver_config_row, gold_config_row, silver_config_row, Layer,
    CONFLICT_KEY,
};
