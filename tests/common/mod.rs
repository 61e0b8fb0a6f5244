//! Shared test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tiergen::{generate_at, parser, GeneratedArtifact, GenerationRequest, RegistrySchema};

/// Load a request fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> GenerationRequest {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load a schema-registry fixture from the tests/test_data directory
pub fn load_registry(name: &str) -> RegistrySchema {
    let path = format!("tests/test_data/{}", name);
    parser::parse_registry_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Pinned header timestamp so whole artifacts can be compared
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

/// Run the full pipeline: request → GeneratedArtifact
pub fn run_pipeline(request: &GenerationRequest) -> Result<GeneratedArtifact, String> {
    let ctx = request
        .context()
        .map_err(|e| format!("Invalid context: {}", e))?;
    let columns = request
        .columns()
        .map_err(|e| format!("Invalid columns: {}", e))?;

    generate_at(&ctx, &columns, &fixed_time()).map_err(|e| format!("Generation failed: {}", e))
}

// =============================================================================
// SQL Inspection Utilities
// =============================================================================

/// Column lines between `CREATE TABLE ... (` and the closing `)`, trimmed
pub fn ddl_columns(ddl: &str) -> Vec<String> {
    ddl.lines()
        .skip(1)
        .take_while(|line| *line != ")")
        .map(|line| line.trim().trim_end_matches(',').to_string())
        .collect()
}

/// Lines of the GROUP BY list, or None when the query has no GROUP BY
pub fn group_by_columns(select: &str) -> Option<Vec<String>> {
    let (_, tail) = select.split_once("\nGROUP BY \n")?;
    Some(
        tail.lines()
            .map(|line| line.trim().trim_end_matches(',').to_string())
            .collect(),
    )
}

/// Value inserted for `column` in an upsert, as rendered SQL
pub fn inserted_value(upsert: &str, column: &str) -> Option<String> {
    let (columns, rest) = upsert.split_once("\n) VALUES (\n")?;
    let index = columns
        .lines()
        .skip(1)
        .position(|line| line.trim().trim_end_matches(',') == column)?;

    // Values may span lines (embedded DDL), so split on the top-level separator
    let values_block = rest.split("\n) ON CONFLICT").next()?;
    split_values(values_block).into_iter().nth(index)
}

fn split_values(block: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut chars = block.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if in_string && chars.peek() == Some(&'\'') => {
                current.push_str("''");
                chars.next();
            }
            '\'' => {
                in_string = !in_string;
                current.push(c);
            }
            ',' if !in_string && chars.peek() == Some(&'\n') => {
                values.push(current.trim().to_string());
                current.clear();
                chars.next();
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        values.push(current.trim().to_string());
    }
    values
}
