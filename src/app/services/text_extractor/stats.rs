//! Extraction result structures

use crate::app::models::{Diagnostic, RawRow, RawTable};

/// Rows pulled out of a text source, ready to be written or converted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Output column headers
    pub columns: Vec<String>,

    /// One entry per extracted record, aligned with `columns`
    pub rows: Vec<Vec<String>>,

    /// Skipped lines and dropped entries, in input order
    pub diagnostics: Vec<Diagnostic>,

    /// Number of text lines scanned
    pub lines_read: usize,
}

impl ExtractionResult {
    /// Empty result for the given column set
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|column| column.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Hand the rows over to the conversion pipeline
    pub fn into_table(self) -> RawTable {
        RawTable {
            headers: self.columns,
            rows: self.rows.into_iter().map(RawRow::new).collect(),
        }
    }
}
