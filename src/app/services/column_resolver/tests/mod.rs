//! Tests for column resolution

use crate::app::models::{ColumnSchema, ColumnSpec, FieldKind};


/// Owned headers from string literals
pub fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Schema with Nom, Lat, Lon and Commune all mandatory
pub fn strict_schema() -> ColumnSchema {
    ColumnSchema {
        specs: vec![
            ColumnSpec::mandatory("Nom", FieldKind::Name),
            ColumnSpec::mandatory("Lat", FieldKind::Latitude),
            ColumnSpec::mandatory("Lon", FieldKind::Longitude),
            ColumnSpec::mandatory("Commune", FieldKind::Commune),
        ],
        include_unbound_columns: true,
        presentation_order: Vec::new(),
    }
}
