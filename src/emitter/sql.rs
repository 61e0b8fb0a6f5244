//! SQL emitter
//!
//! Renders statement nodes into SQL text. List items go one per line behind
//! a single-space indent so generated statements diff cleanly.

use crate::error::GenerateError;
use crate::statement::{ColumnLine, CreateTable, Select, SqlValue, Upsert};

const INDENT: &str = " ";

fn list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("{INDENT}{}", item.as_ref()))
        .collect::<Vec<_>>()
        .join(",\n")
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// Quote a string literal, doubling every single quote exactly once.
///
/// `field` names the value in the error if it cannot be represented.
pub fn quote_literal(field: &str, value: &str) -> Result<String, GenerateError> {
    if value.contains('\0') {
        return Err(GenerateError::escaping(
            field,
            "contains a NUL character, which a string literal cannot hold",
        ));
    }
    Ok(format!("'{}'", value.replace('\'', "''")))
}

pub fn emit_value(field: &str, value: &SqlValue) -> Result<String, GenerateError> {
    match value {
        SqlValue::Text(s) => quote_literal(field, s),
        SqlValue::Int(i) => Ok(i.to_string()),
        SqlValue::Bool(b) => Ok(if *b { "TRUE".to_string() } else { "FALSE".to_string() }),
        SqlValue::Null => Ok("NULL".to_string()),
        SqlValue::Raw(s) => Ok(s.clone()),
    }
}

// ---------------------------------------------------------------------------
// CREATE TABLE
// ---------------------------------------------------------------------------

pub fn emit_create_table(table: &CreateTable) -> Result<String, GenerateError> {
    if table.definition_count() == 0 {
        return Err(GenerateError::configuration(format!(
            "table '{}' has no column definitions",
            table.table
        )));
    }

    let mut lines: Vec<String> = Vec::with_capacity(table.columns.len());
    for (i, line) in table.columns.iter().enumerate() {
        match line {
            ColumnLine::Definition(def) => {
                let more = table.columns[i + 1..]
                    .iter()
                    .any(|l| matches!(l, ColumnLine::Definition(_)));
                let comma = if more { "," } else { "" };
                lines.push(format!("{INDENT}{def}{comma}"));
            }
            ColumnLine::Comment(text) => lines.push(format!("{INDENT}-- {text}")),
        }
    }

    let mut sql = format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n)\nUSING {}",
        table.table,
        lines.join("\n"),
        table.format,
    );

    if !table.partitioned_by.is_empty() {
        sql.push_str(&format!("\nPARTITIONED BY ({})", table.partitioned_by.join(", ")));
    }

    if !table.properties.is_empty() {
        let props = table
            .properties
            .iter()
            .map(|(k, v)| Ok(format!("{}={}", quote_literal(k, k)?, quote_literal(k, v)?)))
            .collect::<Result<Vec<_>, GenerateError>>()?;
        sql.push_str(&format!("\nTBLPROPERTIES (\n{}\n)", list(&props)));
    }

    Ok(sql)
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

pub fn emit_select(select: &Select) -> Result<String, GenerateError> {
    if select.projections.is_empty() {
        return Err(GenerateError::configuration(format!(
            "SELECT from '{}' has no projections",
            select.from
        )));
    }

    let mut sql = format!("SELECT \n{}\nFROM {}", list(&select.projections), select.from);

    if !select.filters.is_empty() {
        let predicates = select
            .filters
            .iter()
            .map(|p| Ok(format!("{} = {}", p.column, emit_value(&p.column, &p.value)?)))
            .collect::<Result<Vec<_>, GenerateError>>()?;
        sql.push_str(&format!("\nWHERE {}", predicates.join(" AND ")));
    }

    if !select.group_by.is_empty() {
        sql.push_str(&format!("\nGROUP BY \n{}", list(&select.group_by)));
    }

    Ok(sql)
}

// ---------------------------------------------------------------------------
// INSERT ... ON CONFLICT
// ---------------------------------------------------------------------------

pub fn emit_upsert(upsert: &Upsert) -> Result<String, GenerateError> {
    if upsert.values.is_empty() {
        return Err(GenerateError::configuration(format!(
            "INSERT into '{}' has no values",
            upsert.table
        )));
    }
    if let Some(missing) = upsert
        .conflict_target
        .iter()
        .find(|c| upsert.get(c).is_none())
    {
        return Err(GenerateError::configuration(format!(
            "conflict column '{}' is not inserted",
            missing
        )));
    }

    let columns: Vec<&str> = upsert.values.iter().map(|(c, _)| c.as_str()).collect();
    let values = upsert
        .values
        .iter()
        .map(|(c, v)| emit_value(c, v))
        .collect::<Result<Vec<_>, _>>()?;

    let mut sql = format!(
        "INSERT INTO {} (\n{}\n) VALUES (\n{}\n)",
        upsert.table,
        list(&columns),
        list(&values),
    );

    if !upsert.conflict_target.is_empty() {
        sql.push_str(&format!(" ON CONFLICT ({})", upsert.conflict_target.join(", ")));
        if upsert.updates.is_empty() {
            sql.push_str(" DO NOTHING");
        } else {
            let assignments = upsert
                .updates
                .iter()
                .map(|(c, v)| Ok(format!("{} = {}", c, emit_value(c, v)?)))
                .collect::<Result<Vec<_>, GenerateError>>()?;
            sql.push_str(&format!(" DO UPDATE SET\n{}", list(&assignments)));
        }
    }

    sql.push(';');
    Ok(sql)
}
