//! Conversion statistics and result structures
//!
//! This module provides the batch outcome of a conversion: accepted records,
//! diagnostics for every rejected row, and summary counts.

use crate::app::models::{Diagnostic, PointRecord};
use serde::Serialize;

/// Conversion result with records, diagnostics and statistics
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Accepted records, in input order
    pub records: Vec<PointRecord>,

    /// One diagnostic per rejected row, in input order
    pub diagnostics: Vec<Diagnostic>,

    pub stats: ConversionStats,
}

impl ConversionResult {
    /// Whether anything can be written
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Simple conversion statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversionStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of rows turned into records
    pub records_accepted: usize,

    /// Number of rows rejected with a diagnostic
    pub rows_skipped: usize,
}

impl ConversionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            records_accepted: 0,
            rows_skipped: 0,
        }
    }

    /// Count one accepted row
    pub fn record_accepted(&mut self) {
        self.total_rows += 1;
        self.records_accepted += 1;
    }

    /// Count one rejected row
    pub fn record_skipped(&mut self) {
        self.total_rows += 1;
        self.rows_skipped += 1;
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_accepted as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if conversion was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ConversionStats {
    fn default() -> Self {
        Self::new()
    }
}
