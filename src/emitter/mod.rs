//! SQL emitter (verb module)
//!
//! Transforms statement nodes into SQL text.

mod sql;

pub use sql::{emit_create_table, emit_select, emit_upsert, emit_value, quote_literal};
