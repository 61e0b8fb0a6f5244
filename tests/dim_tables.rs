//! Integration tests for dimension tables
//!
//! Dimension tables carry SCD bookkeeping instead of time partitions.

mod common;

use common::{ddl_columns, group_by_columns, inserted_value, load_fixture, run_pipeline};

#[test]
fn test_customers_gold_ddl() {
    let request = load_fixture("customers_dim.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    // Table names are lowercased; dimensions come before measures
    assert!(artifact
        .gold_ddl
        .starts_with("CREATE TABLE IF NOT EXISTS gold.dim_customers (\n"));
    assert_eq!(
        ddl_columns(&artifact.gold_ddl),
        vec![
            "customer_id STRING",
            "country STRING",
            "signup_ts TIMESTAMP",
            "lifetime_value DOUBLE",
            "scd_valid_from TIMESTAMP",
            "scd_valid_to TIMESTAMP",
            "is_active BOOLEAN",
            "processing_timestamp TIMESTAMP",
        ]
    );
    assert!(!artifact.gold_ddl.contains("PARTITIONED BY"));
}

#[test]
fn test_customers_silver_is_not_partitioned() {
    let request = load_fixture("customers_dim.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    assert!(artifact
        .silver_ddl
        .starts_with("CREATE TABLE IF NOT EXISTS silver.customers (\n"));
    assert!(!artifact.silver_ddl.contains("PARTITIONED BY"));
    assert!(ddl_columns(&artifact.silver_ddl).contains(&"hour STRING".to_string()));
}

#[test]
fn test_customers_transform_keeps_input_order() {
    let request = load_fixture("customers_dim.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    let sql = &artifact.transform_sql;
    assert!(sql.starts_with(
        "SELECT \n customer_id,\n country,\n MAX(lifetime_value) AS lifetime_value,\n signup_ts,\n NULL scd_valid_from,"
    ));
    assert!(sql.contains(" 1 is_active,"));
    assert!(sql.contains("\nFROM silver.customers"));
    assert!(!sql.contains("WHERE"));
    assert_eq!(
        group_by_columns(sql),
        Some(vec![
            "customer_id".to_string(),
            "country".to_string(),
            "signup_ts".to_string(),
        ])
    );
}

#[test]
fn test_dimension_only_table() {
    let request = load_fixture("countries_dim_only.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    assert!(artifact
        .gold_ddl
        .starts_with("CREATE TABLE IF NOT EXISTS lake.gold.dim_countries (\n"));
    assert!(artifact
        .gold_ddl
        .contains(" name STRING,\n -- none\n scd_valid_from TIMESTAMP,"));
    assert!(artifact.transform_sql.contains("\nFROM lake.silver.countries"));
}

#[test]
fn test_dim_registration_rows() {
    let request = load_fixture("countries_dim_only.yaml");
    let artifact = run_pipeline(&request).expect("Pipeline should succeed");

    let silver = &artifact.silver_config_row;
    assert!(silver.starts_with("INSERT INTO ops.etl_table_config (\n"));
    assert_eq!(inserted_value(silver, "source_table_full_name").as_deref(), Some("'lake.bronze.raw'"));
    assert_eq!(inserted_value(silver, "target_table_full_name").as_deref(), Some("'lake.silver.countries'"));
    assert_eq!(inserted_value(silver, "target_partition_spec").as_deref(), Some("''"));
    assert_eq!(inserted_value(silver, "primary_key_columns").as_deref(), Some("'iso_code,name'"));
    assert_eq!(inserted_value(silver, "tags").as_deref(), Some("'silver,dim,hourly'"));
    assert_eq!(
        inserted_value(silver, "description").as_deref(),
        Some("'Silver table for COUNTRIES - cleaned and deduped from Bronze'")
    );

    let gold = &artifact.gold_config_row;
    assert_eq!(inserted_value(gold, "target_table_name").as_deref(), Some("'dim_countries'"));
    assert_eq!(inserted_value(gold, "tags").as_deref(), Some("'gold,dim,scd,hourly'"));
    assert_eq!(
        inserted_value(gold, "description").as_deref(),
        Some("'Gold dimension table - conformed attributes from countries'")
    );
}
