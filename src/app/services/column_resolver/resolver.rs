//! Prefix-based column resolution

use crate::app::models::{ColumnBinding, ColumnSchema, FieldKind};
use crate::constants::columns::IGNORED_PREFIX;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// The input table cannot be processed at all
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A mandatory logical column has no matching header
    #[error("Missing mandatory column '{logical_name}'")]
    MissingColumn { logical_name: String },

    /// Fewer usable headers than mandatory columns
    #[error("Only {found} usable columns, {required} mandatory columns expected")]
    InsufficientColumns { found: usize, required: usize },
}

/// Bindings of one table against one schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    /// Every bound spec, in declaration order
    pub bindings: Vec<ColumnBinding>,

    /// Columns shown in descriptions, in presentation order, name excluded
    pub description_columns: Vec<ColumnBinding>,

    pub name: ColumnBinding,
    pub latitude: ColumnBinding,
    pub longitude: ColumnBinding,
    pub commune: Option<ColumnBinding>,
}

/// Trim a header and drop a leading byte order mark
pub fn normalize_header(header: &str) -> &str {
    header.trim().trim_start_matches(UTF8_BOM).trim()
}

/// Resolve physical headers against a schema
///
/// Headers starting with `-` and blank headers are never candidates.
pub fn resolve(headers: &[String], schema: &ColumnSchema) -> Result<ResolvedColumns, SchemaError> {
    let candidates: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| (index, normalize_header(header)))
        .filter(|(index, header)| {
            let usable = !header.is_empty() && !header.starts_with(IGNORED_PREFIX);
            if !usable {
                debug!("Column {} '{}' ignored", index + 1, header);
            }
            usable
        })
        .collect();

    let required = schema.mandatory_count();
    if candidates.len() < required {
        return Err(SchemaError::InsufficientColumns {
            found: candidates.len(),
            required,
        });
    }

    let mut claimed = vec![false; candidates.len()];
    let mut bindings = Vec::with_capacity(schema.specs.len());

    for spec in &schema.specs {
        let matched = candidates
            .iter()
            .enumerate()
            .find(|(slot, (_, header))| !claimed[*slot] && header.starts_with(&spec.logical_name));

        match matched {
            Some((slot, &(column_index, header))) => {
                claimed[slot] = true;
                debug!(
                    "Column '{}' bound to header '{}' (column {})",
                    spec.logical_name,
                    header,
                    column_index + 1
                );
                bindings.push(ColumnBinding {
                    logical_name: spec.logical_name.clone(),
                    kind: spec.kind,
                    physical_header: header.to_string(),
                    column_index,
                });
            }
            None if spec.mandatory => {
                return Err(SchemaError::MissingColumn {
                    logical_name: spec.logical_name.clone(),
                });
            }
            None => debug!("Optional column '{}' not found", spec.logical_name),
        }
    }

    let name = required_kind(&bindings, FieldKind::Name)?;
    let latitude = required_kind(&bindings, FieldKind::Latitude)?;
    let longitude = required_kind(&bindings, FieldKind::Longitude)?;
    let commune = bindings
        .iter()
        .find(|binding| binding.kind == FieldKind::Commune)
        .cloned();

    // Unclaimed headers rendered as plain text, file order
    let unbound: Vec<ColumnBinding> = if schema.include_unbound_columns {
        candidates
            .iter()
            .zip(&claimed)
            .filter(|(_, is_claimed)| !**is_claimed)
            .map(|(&(column_index, header), _)| ColumnBinding {
                logical_name: header.to_string(),
                kind: FieldKind::Text,
                physical_header: header.to_string(),
                column_index,
            })
            .collect()
    } else {
        Vec::new()
    };

    let description_columns = if schema.presentation_order.is_empty() {
        let mut columns: Vec<ColumnBinding> = bindings
            .iter()
            .filter(|binding| binding.kind != FieldKind::Name)
            .cloned()
            .chain(unbound)
            .collect();
        columns.sort_by_key(|binding| binding.column_index);
        columns
    } else {
        schema
            .presentation_order
            .iter()
            .filter_map(|logical_name| {
                bindings
                    .iter()
                    .find(|binding| {
                        &binding.logical_name == logical_name && binding.kind != FieldKind::Name
                    })
                    .cloned()
            })
            .chain(unbound)
            .collect()
    };

    Ok(ResolvedColumns {
        bindings,
        description_columns,
        name,
        latitude,
        longitude,
        commune,
    })
}

fn required_kind(bindings: &[ColumnBinding], kind: FieldKind) -> Result<ColumnBinding, SchemaError> {
    bindings
        .iter()
        .find(|binding| binding.kind == kind)
        .cloned()
        .ok_or_else(|| SchemaError::MissingColumn {
            logical_name: format!("{:?}", kind),
        })
}
