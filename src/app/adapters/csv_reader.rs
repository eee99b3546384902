//! Delimited text table reader
//!
//! Reads a CSV-like export into a [`RawTable`]. The delimiter is sniffed from
//! the header line among `,` `;` TAB and `|`, falling back to `;` (the usual
//! French spreadsheet export) when none of them appears. Files that are not
//! valid UTF-8 are decoded as Windows-1252, the encoding of French Excel
//! exports.
//!
//! Rows whose cells are all empty (`;;`) are kept so that row numbers match
//! the data lines of the file.

use crate::app::models::{RawRow, RawTable};
use crate::config::InputConfig;
use crate::constants::{CSV_DELIMITER_CANDIDATES, CSV_FALLBACK_DELIMITER};
use crate::{Error, Result};
use encoding_rs::WINDOWS_1252;
use std::path::Path;
use tracing::{debug, info};

/// Pick the candidate delimiter occurring most often outside quotes in the
/// header line; ties go to the earlier candidate
pub fn sniff_delimiter(header_line: &str) -> u8 {
    let mut counts = [0usize; 256];
    let mut in_quotes = false;

    for byte in header_line.bytes() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            _ if !in_quotes => counts[byte as usize] += 1,
            _ => {}
        }
    }

    CSV_DELIMITER_CANDIDATES
        .iter()
        .copied()
        .filter(|&candidate| counts[candidate as usize] > 0)
        .fold(None, |best: Option<u8>, candidate| match best {
            Some(current) if counts[current as usize] >= counts[candidate as usize] => {
                Some(current)
            }
            _ => Some(candidate),
        })
        .unwrap_or(CSV_FALLBACK_DELIMITER)
}

/// Decode file bytes, accepting Windows-1252 exports
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            debug!("Input is not UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(error.as_bytes());
            text.into_owned()
        }
    }
}

/// Read a text source (wiki page dump, inventory) with the same decoding
/// rules as tables
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let text = decode(bytes);
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Reader for delimited tables
#[derive(Debug, Clone, Default)]
pub struct CsvTableReader {
    delimiter: Option<u8>,
}

impl CsvTableReader {
    /// Reader honouring the configured delimiter override
    pub fn new(config: &InputConfig) -> Self {
        Self {
            delimiter: config.delimiter.map(|delimiter| delimiter as u8),
        }
    }

    /// Read a whole file into a table
    pub fn read_file(&self, path: &Path) -> Result<RawTable> {
        info!("Reading table: {}", path.display());

        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

        self.read_str(&decode(bytes), &path.display().to_string())
    }

    /// Read table text; `source` names the input in error messages
    pub fn read_str(&self, content: &str, source: &str) -> Result<RawTable> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let header_line = content.lines().next().unwrap_or_default();
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| sniff_delimiter(header_line));
        debug!("Using delimiter {:?} for {}", delimiter as char, source);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Error::csv_parsing(source, "Failed to read header line", Some(e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = RawTable::new(headers);

        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                Error::csv_parsing(source, format!("Failed to read record {}", index + 1), Some(e))
            })?;

            table.push_row(RawRow::new(record.iter().map(str::to_string).collect()));
        }

        info!(
            "Read {} rows with {} columns from {}",
            table.len(),
            table.headers.len(),
            source
        );
        Ok(table)
    }
}
