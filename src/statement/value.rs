//! Typed SQL values

/// A value placed into a statement.
///
/// `Text` is always quoted and escaped by the emitter. `Raw` is spliced in
/// verbatim and is only ever built by this crate from identifiers and
/// keywords it controls (`CURRENT_TIMESTAMP`, `EXCLUDED.col`).
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Null,
    Raw(String),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    /// `Text` for `Some`, `Null` for `None`
    pub fn optional_text(value: Option<impl Into<String>>) -> Self {
        value.map(SqlValue::text).unwrap_or(SqlValue::Null)
    }

    pub fn current_timestamp() -> Self {
        SqlValue::Raw("CURRENT_TIMESTAMP".to_string())
    }

    /// `EXCLUDED.<column>` inside an `ON CONFLICT DO UPDATE`
    pub fn excluded(column: &str) -> Self {
        SqlValue::Raw(format!("EXCLUDED.{}", column))
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        SqlValue::Int(i)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}
