//! Generator input types (nouns)
//!
//! Columns, table types and naming rules a generation call is made from.

mod column;
mod context;
mod identifier;
mod naming;
mod types;

pub use column::{check_not_reserved, validate_columns, ColumnDescriptor, ColumnSpec, RESERVED_COLUMNS};
pub use context::GenerationContext;
pub use identifier::Identifier;
pub use naming::NamingPolicy;
pub use types::{
    AggregateMethod, ParseAggregateMethodError, ParseSqlTypeError, ParseTableTypeError,
    SqlType, TableType,
};
