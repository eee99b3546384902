//! Batch conversion of a raw table into point records
//!
//! Resolves the table's headers once, then validates every row in order.
//! Only a schema error stops the batch; every row ends up either in
//! `records` or in `diagnostics`, never both.

use super::stats::{ConversionResult, ConversionStats};
use super::validator::RowValidator;
use crate::Result;
use crate::app::models::{ColumnSchema, RawTable};
use crate::app::services::column_resolver::resolve;
use crate::config::Config;
use tracing::{debug, info};

/// Table to records converter for one column schema
#[derive(Debug, Clone)]
pub struct PointPipeline {
    schema: ColumnSchema,
    config: Config,
}

impl PointPipeline {
    pub fn new(schema: ColumnSchema, config: Config) -> Self {
        Self { schema, config }
    }

    /// Convert every row of the table
    pub fn run(&self, table: &RawTable) -> Result<ConversionResult> {
        let columns = resolve(&table.headers, &self.schema)?;
        let validator = RowValidator::new(columns, &self.config);

        let mut records = Vec::new();
        let mut diagnostics = Vec::new();
        let mut stats = ConversionStats::new();

        for (index, row) in table.rows.iter().enumerate() {
            let row_number = index + 1;
            match validator.validate(row, row_number) {
                Ok(record) => {
                    stats.record_accepted();
                    records.push(record);
                }
                Err(diagnostic) => {
                    debug!("{}", diagnostic);
                    stats.record_skipped();
                    diagnostics.push(diagnostic);
                }
            }
        }

        info!(
            "{} records accepted, {} rows skipped",
            stats.records_accepted, stats.rows_skipped
        );

        Ok(ConversionResult {
            records,
            diagnostics,
            stats,
        })
    }
}
