//! Data models for point-of-interest conversion
//!
//! This module contains the core data structures shared by the readers, the
//! normalization pipeline and the writers: column declarations and their
//! resolved bindings, raw input rows, accepted point records and row-level
//! diagnostics.

use crate::constants::columns;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Column Declarations
// =============================================================================

/// Semantic role of a column, selects how its value is validated and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Point name, mandatory and never rendered in the description
    Name,
    /// Latitude angle text
    Latitude,
    /// Longitude angle text
    Longitude,
    /// Commune name, rendered as an encyclopedia link
    Commune,
    /// Compact condition code, rendered as a bullet list
    StatusCode,
    /// Web page URL, rendered as a shortened anchor
    WebLink,
    /// Anything else, rendered as text (URLs auto-linked)
    Text,
}

/// Static declaration of one logical column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Prefix matched against physical headers
    pub logical_name: String,

    /// Whether a missing column fails the whole batch
    pub mandatory: bool,

    /// Rendering and validation role
    pub kind: FieldKind,
}

impl ColumnSpec {
    /// Declare a mandatory column
    pub fn mandatory(logical_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            logical_name: logical_name.into(),
            mandatory: true,
            kind,
        }
    }

    /// Declare an optional column
    pub fn optional(logical_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            logical_name: logical_name.into(),
            mandatory: false,
            kind,
        }
    }
}

/// Ordered column declarations for one source profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Declarations, resolved in this order
    pub specs: Vec<ColumnSpec>,

    /// Render headers no spec claimed as plain text columns, in file order
    pub include_unbound_columns: bool,

    /// Logical names in description order; empty means file order
    pub presentation_order: Vec<String>,
}

impl ColumnSchema {
    /// Generic table profile: name and coordinates mandatory, every other
    /// column shown in file order
    pub fn generic() -> Self {
        Self {
            specs: vec![
                ColumnSpec::mandatory(columns::NAME, FieldKind::Name),
                ColumnSpec::mandatory(columns::LATITUDE, FieldKind::Latitude),
                ColumnSpec::mandatory(columns::LONGITUDE, FieldKind::Longitude),
                ColumnSpec::optional(columns::COMMUNE, FieldKind::Commune),
            ],
            include_unbound_columns: true,
            presentation_order: Vec::new(),
        }
    }

    /// Megalith inventory profile with a fixed field set and presentation
    pub fn dolmen() -> Self {
        Self {
            specs: vec![
                ColumnSpec::mandatory(columns::NAME, FieldKind::Name),
                ColumnSpec::mandatory(columns::LATITUDE, FieldKind::Latitude),
                ColumnSpec::mandatory(columns::LONGITUDE, FieldKind::Longitude),
                ColumnSpec::optional(columns::PLACE, FieldKind::Text),
                ColumnSpec::mandatory(columns::COMMUNE, FieldKind::Commune),
                ColumnSpec::optional(columns::STATUS, FieldKind::StatusCode),
                ColumnSpec::optional(columns::TUMULUS, FieldKind::Text),
                ColumnSpec::optional(columns::ORTHOSTATS, FieldKind::Text),
                ColumnSpec::optional(columns::TABLE, FieldKind::Text),
                ColumnSpec::optional(columns::PROTECTION, FieldKind::Text),
                ColumnSpec::optional(columns::DETAILS, FieldKind::Text),
                ColumnSpec::optional(columns::URL, FieldKind::WebLink),
                ColumnSpec::optional(columns::OSM, FieldKind::Text),
            ],
            include_unbound_columns: false,
            presentation_order: [
                columns::COMMUNE,
                columns::PLACE,
                columns::LATITUDE,
                columns::LONGITUDE,
                columns::PROTECTION,
                columns::DETAILS,
                columns::STATUS,
                columns::TUMULUS,
                columns::ORTHOSTATS,
                columns::TABLE,
                columns::OSM,
                columns::URL,
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
        }
    }

    /// Number of mandatory declarations
    pub fn mandatory_count(&self) -> usize {
        self.specs.iter().filter(|spec| spec.mandatory).count()
    }
}

/// A logical column resolved to a physical one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnBinding {
    /// Logical name, or the header itself for unbound columns
    pub logical_name: String,
    pub kind: FieldKind,
    /// Trimmed physical header, used in descriptions and diagnostics
    pub physical_header: String,
    /// Position in the input row
    pub column_index: usize,
}

// =============================================================================
// Raw Input
// =============================================================================

/// One input row: cell text by column index plus optional hyperlinks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<String>,
    /// Per-cell hyperlink override, wins over the cell text when present
    pub links: Vec<Option<String>>,
}

impl RawRow {
    /// Row of plain text cells
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            links: Vec::new(),
        }
    }

    /// Attach a hyperlink to a cell
    pub fn with_link(mut self, column_index: usize, link: impl Into<String>) -> Self {
        if self.links.len() <= column_index {
            self.links.resize(column_index + 1, None);
        }
        self.links[column_index] = Some(link.into());
        self
    }

    /// Trimmed cell text, empty when the row is shorter than the header
    pub fn cell(&self, column_index: usize) -> &str {
        self.cells
            .get(column_index)
            .map(|cell| cell.trim())
            .unwrap_or("")
    }

    /// Hyperlink if the cell has one, else its trimmed text
    pub fn value(&self, column_index: usize) -> &str {
        match self.links.get(column_index) {
            Some(Some(link)) if !link.trim().is_empty() => link.trim(),
            _ => self.cell(column_index),
        }
    }
}

/// Headers and rows handed from a reader or extractor to the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Pipeline Output
// =============================================================================

/// A validated point, ready for the KML writer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    /// 1-based position of the source row
    pub row_number: usize,
    pub name: String,
    /// Commune name, empty when the source has none
    pub commune: String,
    /// WGS84 decimal degrees
    pub latitude: f64,
    /// WGS84 decimal degrees
    pub longitude: f64,
    /// HTML description blob
    pub description: String,
}

/// Reason a row (or text line) was not turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based row or line number
    pub row_number: usize,

    /// Physical header of the offending field, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    pub message: String,
}

impl Diagnostic {
    pub fn new(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            row_number,
            field: None,
            message: message.into(),
        }
    }

    /// Diagnostic attached to a named field
    pub fn for_field(
        row_number: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row_number,
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ligne {} : {}", self.row_number, self.message)
    }
}
