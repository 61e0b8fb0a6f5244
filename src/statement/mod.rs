//! SQL statement types (nouns)
//!
//! Small builders over typed fragments. Free text only enters a statement as
//! a `SqlValue::Text`, which the emitter always escapes.

mod node;
mod value;

pub use node::{ColumnLine, CreateTable, Predicate, Select, Upsert, EMPTY_BLOCK};
pub use value::SqlValue;
