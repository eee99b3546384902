//! Per-row validation
//!
//! A row becomes a [`PointRecord`] when it has a name and two readable
//! coordinates; otherwise it becomes a single [`Diagnostic`] naming the
//! first failing field. Checks run in a fixed order: name, latitude,
//! longitude.

use super::description::DescriptionBuilder;
use crate::app::models::{ColumnBinding, Diagnostic, PointRecord, RawRow};
use crate::app::services::column_resolver::ResolvedColumns;
use crate::app::services::coordinates::parse_angle;
use crate::config::Config;
use crate::constants::messages::{EMPTY_FIELD, INVALID_FIELD, OUT_OF_RANGE_FIELD};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Validates rows of one resolved table
#[derive(Debug, Clone)]
pub struct RowValidator {
    columns: ResolvedColumns,
    description: DescriptionBuilder,
    placeholder: String,
    check_coordinate_ranges: bool,
}

impl RowValidator {
    pub fn new(columns: ResolvedColumns, config: &Config) -> Self {
        Self {
            columns,
            description: DescriptionBuilder::new(config.description.clone()),
            placeholder: config.description.placeholder.clone(),
            check_coordinate_ranges: config.validation.check_coordinate_ranges,
        }
    }

    /// Validate one row, `row_number` being its 1-based position
    pub fn validate(&self, row: &RawRow, row_number: usize) -> Result<PointRecord, Diagnostic> {
        let name_column = &self.columns.name;
        let name = row.cell(name_column.column_index);
        if name.is_empty() {
            return Err(field_diagnostic(row_number, name_column, EMPTY_FIELD, None));
        }

        let latitude = self.coordinate(row, row_number, &self.columns.latitude, MAX_LATITUDE)?;
        let longitude =
            self.coordinate(row, row_number, &self.columns.longitude, MAX_LONGITUDE)?;

        let commune = self
            .columns
            .commune
            .as_ref()
            .map(|column| row.cell(column.column_index))
            .filter(|value| *value != self.placeholder)
            .unwrap_or("")
            .to_string();

        let description =
            self.description
                .build(&self.columns.description_columns, row, latitude, longitude);

        Ok(PointRecord {
            row_number,
            name: name.to_string(),
            commune,
            latitude,
            longitude,
            description,
        })
    }

    fn coordinate(
        &self,
        row: &RawRow,
        row_number: usize,
        column: &ColumnBinding,
        limit: f64,
    ) -> Result<f64, Diagnostic> {
        let raw = row.cell(column.column_index);
        if raw.is_empty() {
            return Err(field_diagnostic(row_number, column, EMPTY_FIELD, None));
        }

        let value = parse_angle(raw)
            .map_err(|_| field_diagnostic(row_number, column, INVALID_FIELD, Some(raw)))?;

        if self.check_coordinate_ranges && value.abs() > limit {
            return Err(field_diagnostic(
                row_number,
                column,
                OUT_OF_RANGE_FIELD,
                Some(raw),
            ));
        }

        Ok(value)
    }
}

/// `champ <header> <reason>[ : <raw>]`
fn field_diagnostic(
    row_number: usize,
    column: &ColumnBinding,
    reason: &str,
    raw: Option<&str>,
) -> Diagnostic {
    let message = match raw {
        Some(raw) => format!("champ {} {} : {}", column.physical_header, reason, raw),
        None => format!("champ {} {}", column.physical_header, reason),
    };
    Diagnostic::for_field(row_number, column.physical_header.clone(), message)
}
