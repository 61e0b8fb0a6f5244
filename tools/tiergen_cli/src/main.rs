use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use tiergen::{parser, AggregateMethod, GeneratedArtifact, GenerationRequest, TableType};

#[derive(Parser)]
#[command(name = "tiergen")]
#[command(about = "Generate silver/gold DDL, transform SQL and etl_table_config upserts")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline for a request file
    Generate {
        /// Request file (YAML or JSON)
        #[arg(long)]
        request: PathBuf,

        /// Write one .sql file per output instead of printing
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the artifact as JSON
        #[arg(long)]
        json: bool,

        /// Leave the documentation banner off the config scripts
        #[arg(long)]
        no_header: bool,
    },
    /// Show how the request's columns split into dimensions and measures
    Classify {
        /// Request file (YAML or JSON)
        #[arg(long)]
        request: PathBuf,
    },
    /// Generate from a schema-registry dump; columns default to dimensions
    Schema {
        /// Registry result file (tableName, schemaMap, registryUrl)
        #[arg(long)]
        schema: PathBuf,

        /// dim or fact
        #[arg(long, default_value = "fact")]
        table_type: TableType,

        /// Recorded as created_by / updated_by
        #[arg(long)]
        author: String,

        /// Mark a column as a measure: --measure amount=SUM (repeatable)
        #[arg(long = "measure", value_parser = parse_measure)]
        measures: Vec<(String, AggregateMethod)>,

        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn parse_measure(s: &str) -> Result<(String, AggregateMethod), String> {
    let (name, method) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AGGREGATE, got '{}'", s))?;
    let method: AggregateMethod = method.parse().map_err(|e| format!("{}", e))?;
    if method == AggregateMethod::None {
        return Err(format!("'{}' needs an aggregate other than NONE", name));
    }
    Ok((name.to_string(), method))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Commands::Generate { request, out_dir, json, no_header } => {
            handle_generate(&request, out_dir.as_deref(), json, no_header)
        }
        Commands::Classify { request } => handle_classify(&request),
        Commands::Schema { schema, table_type, author, measures, out_dir } => {
            handle_schema(&schema, table_type, author, measures, out_dir.as_deref())
        }
    }
}

fn load_request(path: &Path) -> anyhow::Result<GenerationRequest> {
    parser::parse_file(path).with_context(|| format!("reading request {}", path.display()))
}

/// Handle the 'generate' subcommand
fn handle_generate(request: &Path, out_dir: Option<&Path>, json: bool, no_header: bool) -> anyhow::Result<()> {
    let request = load_request(request)?;
    let artifact = request.generate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&artifact)?);
        return Ok(());
    }
    emit(&artifact, out_dir, !no_header)
}

/// Handle the 'classify' subcommand
fn handle_classify(request: &Path) -> anyhow::Result<()> {
    let request = load_request(request)?;
    let classification = tiergen::classify_specs(&request.columns)?;
    println!("{}", serde_json::to_string_pretty(&classification)?);
    Ok(())
}

/// Handle the 'schema' subcommand
fn handle_schema(
    schema: &Path,
    table_type: TableType,
    author: String,
    measures: Vec<(String, AggregateMethod)>,
    out_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let registry = parser::parse_registry_file(schema)
        .with_context(|| format!("reading registry schema {}", schema.display()))?;
    let measures: HashMap<String, AggregateMethod> = measures.into_iter().collect();
    let request = registry.into_request(table_type, author, &measures)?;
    let artifact = request.generate()?;
    emit(&artifact, out_dir, true)
}

fn emit(artifact: &GeneratedArtifact, out_dir: Option<&Path>, with_header: bool) -> anyhow::Result<()> {
    match out_dir {
        Some(dir) => {
            let written = write_artifact(artifact, dir, with_header)?;
            info!("wrote {} files to {}", written.len(), dir.display());
        }
        None => {
            for (name, body) in outputs(artifact, with_header) {
                println!("-- >>> {}\n{}\n", name, body);
            }
        }
    }
    Ok(())
}

fn outputs(artifact: &GeneratedArtifact, with_header: bool) -> Vec<(&'static str, String)> {
    let (silver_config, gold_config) = if with_header {
        (artifact.silver_config_script(), artifact.gold_config_script())
    } else {
        (
            format!("{}\n", artifact.silver_config_row),
            format!("{}\n", artifact.gold_config_row),
        )
    };
    vec![
        ("silver_ddl.sql", format!("{}\n", artifact.silver_ddl)),
        ("gold_ddl.sql", format!("{}\n", artifact.gold_ddl)),
        ("gold_transform.sql", format!("{}\n", artifact.transform_sql)),
        ("silver_config.sql", silver_config),
        ("gold_config.sql", gold_config),
    ]
}

fn write_artifact(artifact: &GeneratedArtifact, dir: &Path, with_header: bool) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut written = Vec::new();
    for (name, body) in outputs(artifact, with_header) {
        let path = dir.join(name);
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
