//! Transform query synthesizer (verb module)
//!
//! ClassificationResult → the SELECT that re-populates gold from silver.

mod build;

pub use build::{build_transform_sql, transform_select};
