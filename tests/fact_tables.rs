//! Integration tests for fact tables
//!
//! Fact tables are time-partitioned in both layers and aggregated on load.

mod common;

use common::{ddl_columns, group_by_columns, inserted_value, load_fixture, run_pipeline};

#[test]
fn test_orders_gold_ddl() {
    let request = load_fixture("orders_fact.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    assert!(artifact
        .gold_ddl
        .starts_with("CREATE TABLE IF NOT EXISTS gold.fact_orders (\n"));
    assert_eq!(
        ddl_columns(&artifact.gold_ddl),
        vec![
            "user_id STRING",
            "amount DOUBLE",
            "year STRING",
            "month STRING",
            "day STRING",
            "hour STRING",
        ]
    );
    assert!(artifact
        .gold_ddl
        .contains("\nPARTITIONED BY (year, month, day, hour)\n"));
}

#[test]
fn test_orders_silver_ddl() {
    let request = load_fixture("orders_fact.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    assert!(artifact
        .silver_ddl
        .starts_with("CREATE TABLE IF NOT EXISTS silver.orders (\n"));
    assert_eq!(
        ddl_columns(&artifact.silver_ddl),
        vec![
            "user_id STRING",
            "amount DOUBLE",
            "offset BIGINT",
            "year STRING",
            "month STRING",
            "day STRING",
            "hour STRING",
        ]
    );
    assert!(artifact.silver_ddl.contains("PARTITIONED BY (year, month, day, hour)"));
    assert!(artifact.silver_ddl.contains("USING iceberg"));
}

#[test]
fn test_orders_transform() {
    let request = load_fixture("orders_fact.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    let sql = &artifact.transform_sql;
    assert!(sql.starts_with("SELECT \n user_id,\n SUM(amount) AS amount,\n year,"));
    assert!(sql.contains("\nFROM silver.orders\n"));
    assert!(sql.contains("WHERE year = '${year}' AND month = '${month}'"));
    assert_eq!(
        group_by_columns(sql),
        Some(vec![
            "user_id".to_string(),
            "year".to_string(),
            "month".to_string(),
            "day".to_string(),
            "hour".to_string(),
        ])
    );
}

#[test]
fn test_measures_only_fact() {
    let request = load_fixture("page_views_measures_only.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    // Empty dimension block renders as a comment, never a dangling comma
    let columns = ddl_columns(&artifact.gold_ddl);
    assert_eq!(columns[0], "-- none");
    assert_eq!(columns[1], "views BIGINT");
    assert!(!artifact.gold_ddl.contains("-- none,"));

    assert!(artifact.transform_sql.contains("COUNT(views) AS views"));
    assert!(artifact.transform_sql.contains("AVG(dwell_ms) AS dwell_ms"));
    assert!(artifact.transform_sql.contains("WHERE year = '${year}'"));
    assert_eq!(group_by_columns(&artifact.transform_sql), None);

    assert_eq!(
        inserted_value(&artifact.gold_config_row, "primary_key_columns").as_deref(),
        Some("NULL")
    );
}

#[test]
fn test_fact_gold_registration() {
    let request = load_fixture("orders_fact.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");
    let row = &artifact.gold_config_row;

    assert_eq!(inserted_value(row, "layer").as_deref(), Some("'gold'"));
    assert_eq!(inserted_value(row, "target_table_name").as_deref(), Some("'fact_orders'"));
    assert_eq!(inserted_value(row, "source_table_full_name").as_deref(), Some("'silver.orders'"));
    assert_eq!(inserted_value(row, "depends_on_tables").as_deref(), Some("'silver.orders'"));
    assert_eq!(
        inserted_value(row, "target_partition_spec").as_deref(),
        Some("'year,month,day,hour'")
    );
    assert_eq!(inserted_value(row, "primary_key_columns").as_deref(), Some("'user_id'"));
    assert_eq!(
        inserted_value(row, "tags").as_deref(),
        Some("'gold,fact,aggregation,hourly'")
    );

    // The embedded transform keeps its own quotes, doubled once
    let transform = inserted_value(row, "transform_sql").expect("transform_sql is inserted");
    assert!(transform.contains("year = ''${year}''"));
    assert!(!transform.contains("''''"));
}

#[test]
fn test_every_fact_fixture_is_partitioned() {
    for name in ["orders_fact.yaml", "page_views_measures_only.yaml"] {
        let artifact = run_pipeline(&load_fixture(name)).expect("Pipeline should succeed");
        assert!(
            artifact.gold_ddl.contains("PARTITIONED BY (year, month, day, hour)"),
            "{} gold DDL is not partitioned",
            name
        );
        assert!(!artifact.gold_ddl.contains("scd_valid_from"));
    }
}
