//! tiergen - Generate two-tier lakehouse tables and their ETL registrations
//!
//! From a flat column schema this library produces:
//! - CREATE TABLE statements for the silver (cleaned) and gold
//!   (aggregated fact / slowly-changing dimension) layers
//! - The SELECT that re-populates gold from silver
//! - Idempotent `etl_table_config` upserts registering both tables
//!
//! Nothing here touches a database; every output is plain SQL text.
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `model/` - columns, types, table types, naming policy, generation context
//! - `request/` - request documents (GenerationRequest, RegistrySchema)
//! - `statement/` - typed statement nodes (CreateTable, Select, Upsert)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML/JSON → GenerationRequest
//! - `classifier/` - columns → ClassificationResult
//! - `ddl/` - ClassificationResult → silver/gold CREATE TABLE
//! - `transform/` - ClassificationResult → gold transform query
//! - `config_row/` - DDL + transform → config table upserts
//! - `emitter/` - statement nodes → SQL text
//! - `generator/` - the whole pipeline → GeneratedArtifact
//!
//! # Example
//!
//! ```
//! use tiergen::{generate, ColumnDescriptor, GenerationContext, SqlType, AggregateMethod, TableType};
//!
//! let ctx = GenerationContext::new("orders", TableType::Fact, "alice")?;
//! let columns = vec![
//!     ColumnDescriptor::dimension("user_id", SqlType::String)?,
//!     ColumnDescriptor::measure("amount", SqlType::Double, AggregateMethod::Sum)?,
//! ];
//! let artifact = generate(&ctx, &columns)?;
//! assert!(artifact.gold_ddl.contains("gold.fact_orders"));
//! # Ok::<(), tiergen::GenerateError>(())
//! ```

pub mod model;
pub mod request;
pub mod statement;
pub mod parser;
pub mod classifier;
pub mod ddl;
pub mod transform;
pub mod config_row;
pub mod emitter;
pub mod generator;
pub mod error;

// Re-export commonly used types
pub use model::{
    AggregateMethod, ColumnDescriptor, ColumnSpec, GenerationContext, Identifier, NamingPolicy,
    SqlType, TableType,
};
pub use request::{GenerationRequest, RegistryField, RegistrySchema};
pub use classifier::{classify, classify_specs, ClassificationResult};
pub use ddl::{build_gold_ddl, build_silver_ddl};
pub use transform::build_transform_sql;
pub use config_row::{build_gold_config_row, build_silver_config_row, Layer};
pub use generator::{generate, generate_at, generate_from_specs, render_header, GeneratedArtifact};
pub use error::{GenerateError, ParseError};
