//! Gold re-population query synthesis

use log::{debug, warn};
use crate::classifier::ClassificationResult;
use crate::ddl::TIME_PARTITIONS;
use crate::emitter::emit_select;
use crate::error::GenerateError;
use crate::model::{GenerationContext, TableType};
use crate::statement::{Select, SqlValue};

/// Placeholder columns that seed SCD bookkeeping on dimension loads
const SCD_PROJECTIONS: [&str; 4] = [
    "NULL scd_valid_from",
    "NULL scd_valid_to",
    "1 is_active",
    "NULL processing_timestamp",
];

/// Scheduler macro for a partition column: `${year}`.
///
/// Left unresolved; the downstream job substitutes it at run time.
fn partition_macro(column: &str) -> String {
    format!("${{{}}}", column)
}

/// Build the SELECT node that loads gold from silver.
///
/// GROUP BY is omitted entirely when there are no dimension columns.
pub fn transform_select(ctx: &GenerationContext, classification: &ClassificationResult) -> Select {
    let select = Select::new(ctx.silver_table()).project(classification.projections.iter().cloned());

    let select = match ctx.table_type {
        TableType::Fact => {
            let mut select = select.project(TIME_PARTITIONS);
            for column in TIME_PARTITIONS {
                select = select.filter_eq(column, SqlValue::text(partition_macro(column)));
            }
            select
        }
        TableType::Dim => select.project(SCD_PROJECTIONS),
    };

    if !classification.has_dimensions() {
        return select;
    }

    match ctx.table_type {
        TableType::Fact => select
            .group_by(classification.dimension_names.iter().cloned())
            .group_by(TIME_PARTITIONS),
        TableType::Dim => select.group_by(classification.dimension_names.iter().cloned()),
    }
}

pub fn build_transform_sql(ctx: &GenerationContext, classification: &ClassificationResult) -> Result<String, GenerateError> {
    if !classification.has_dimensions() {
        warn!(
            "'{}' has no dimension columns; transform query has no GROUP BY",
            ctx.table_name
        );
    }
    let sql = emit_select(&transform_select(ctx, classification))?;
    debug!("transform SQL for '{}': {} bytes", ctx.table_name, sql.len());
    Ok(sql)
}
