//! Statement node types

use super::value::SqlValue;

/// Placeholder emitted in place of an empty column block
pub const EMPTY_BLOCK: &str = "none";

/// A line inside a CREATE TABLE column list
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnLine {
    /// `name TYPE`
    Definition(String),
    /// `-- text`; never followed by a comma
    Comment(String),
}

/// CREATE TABLE IF NOT EXISTS
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Qualified table name (schema.table)
    pub table: String,
    pub columns: Vec<ColumnLine>,
    /// Table format for `USING`
    pub format: String,
    pub partitioned_by: Vec<String>,
    /// TBLPROPERTIES key/value pairs
    pub properties: Vec<(String, String)>,
}

impl CreateTable {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            format: "iceberg".to_string(),
            partitioned_by: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Append a block of definitions, or the `-- none` placeholder if empty
    pub fn with_column_block(mut self, definitions: &[String]) -> Self {
        if definitions.is_empty() {
            self.columns.push(ColumnLine::Comment(EMPTY_BLOCK.to_string()));
        } else {
            self.columns
                .extend(definitions.iter().cloned().map(ColumnLine::Definition));
        }
        self
    }

    pub fn with_columns(mut self, definitions: &[&str]) -> Self {
        self.columns
            .extend(definitions.iter().map(|d| ColumnLine::Definition(d.to_string())));
        self
    }

    pub fn with_partitions(mut self, columns: &[&str]) -> Self {
        self.partitioned_by = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Number of real column definitions (comments excluded)
    pub fn definition_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| matches!(c, ColumnLine::Definition(_)))
            .count()
    }
}

/// `column = value` predicate joined with AND
#[derive(Debug, Clone)]
pub struct Predicate {
    pub column: String,
    pub value: SqlValue,
}

/// SELECT ... FROM ... [WHERE ...] [GROUP BY ...]
#[derive(Debug, Clone)]
pub struct Select {
    pub projections: Vec<String>,
    pub from: String,
    pub filters: Vec<Predicate>,
    pub group_by: Vec<String>,
}

impl Select {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            projections: Vec::new(),
            from: from.into(),
            filters: Vec::new(),
            group_by: Vec::new(),
        }
    }

    pub fn project<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projections.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn filter_eq(mut self, column: impl Into<String>, value: SqlValue) -> Self {
        self.filters.push(Predicate { column: column.into(), value });
        self
    }

    pub fn group_by<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by.extend(items.into_iter().map(Into::into));
        self
    }
}

/// INSERT ... ON CONFLICT (...) DO UPDATE SET ...
#[derive(Debug, Clone)]
pub struct Upsert {
    pub table: String,
    /// Column/value pairs in insertion order
    pub values: Vec<(String, SqlValue)>,
    pub conflict_target: Vec<String>,
    pub updates: Vec<(String, SqlValue)>,
}

impl Upsert {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            values: Vec::new(),
            conflict_target: Vec::new(),
            updates: Vec::new(),
        }
    }

    pub fn value(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.values.push((column.into(), value.into()));
        self
    }

    pub fn on_conflict(mut self, columns: &[&str]) -> Self {
        self.conflict_target = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// `column = EXCLUDED.column` for each name
    pub fn update_from_excluded(mut self, columns: &[&str]) -> Self {
        for column in columns {
            self.updates.push((column.to_string(), SqlValue::excluded(column)));
        }
        self
    }

    pub fn update(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.updates.push((column.into(), value.into()));
        self
    }

    /// Look up the value inserted for a column
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_block_placeholder() {
        let table = CreateTable::new("gold.fact_t")
            .with_column_block(&["a STRING".to_string()])
            .with_column_block(&[]);
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[1], ColumnLine::Comment("none".into()));
        assert_eq!(table.definition_count(), 1);
    }

    #[test]
    fn test_upsert_builder() {
        let upsert = Upsert::new("etl_table_config")
            .value("layer", "silver")
            .value("batch_size", 10000i64)
            .on_conflict(&["layer", "source_table_name"])
            .update_from_excluded(&["target_table_ddl"]);
        assert_eq!(upsert.get("layer"), Some(&SqlValue::Text("silver".into())));
        assert_eq!(upsert.get("batch_size"), Some(&SqlValue::Int(10000)));
        assert_eq!(upsert.updates[0].1, SqlValue::Raw("EXCLUDED.target_table_ddl".into()));
    }
}
