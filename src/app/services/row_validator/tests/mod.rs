//! Test utilities for row validation
//!
//! Shared table builders used by the validator, description and pipeline
//! tests.

use crate::app::models::{RawRow, RawTable};

mod description_tests;
mod stats_tests;
mod validator_tests;

/// Row of owned cells from string literals
pub fn row(cells: &[&str]) -> RawRow {
    RawRow::new(cells.iter().map(|cell| cell.to_string()).collect())
}

/// Table from header and row literals
pub fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    let mut table = RawTable::new(headers.iter().map(|h| h.to_string()).collect());
    for cells in rows {
        table.push_row(row(cells));
    }
    table
}

/// The three-row table used by the end-to-end checks
pub fn three_row_table() -> RawTable {
    table(
        &["Nom", "Lat", "Lon", "Commune"],
        &[
            &["Site A", "44.5", "1.5", "Cahors"],
            &["", "44.5", "1.5", "Figeac"],
            &["Site B", "44°30'00\"", "1.5", "?"],
        ],
    )
}
