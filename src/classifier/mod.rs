//! Column classifier (verb module)
//!
//! Splits a column list into dimensions (grouped on) and measures
//! (aggregated), producing DDL and projection fragments for both.

mod classify;

pub use classify::{classify, classify_specs, ClassificationResult};
