//! Delimited writer for extracted records
//!
//! Wiki extractions are written comma separated with minimal quoting, the
//! inventory semicolon separated with every field quoted, so that the
//! French spreadsheet import keeps descriptions and decimal commas intact.

use crate::app::services::text_extractor::ExtractionResult;
use crate::constants::EXTRACTION_FILE_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output flavour of an extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDialect {
    /// `,` separated, quoted when needed
    Wiki,
    /// `;` separated, every field quoted
    Inventory,
}

impl RecordDialect {
    pub fn delimiter(self) -> u8 {
        match self {
            Self::Wiki => b',',
            Self::Inventory => b';',
        }
    }

    pub fn quote_style(self) -> QuoteStyle {
        match self {
            Self::Wiki => QuoteStyle::Necessary,
            Self::Inventory => QuoteStyle::Always,
        }
    }

    /// Default output file for an extraction of `kind` from `input`
    ///
    /// Wiki extractions are named after the source and the date since the
    /// input is a page dump; the inventory keeps the input name.
    pub fn default_output_path(self, input: &Path, kind: &str, date: NaiveDate) -> PathBuf {
        match self {
            Self::Wiki => {
                let file_name = format!(
                    "wikipedia_fr_{}_{}.csv",
                    kind,
                    date.format(EXTRACTION_FILE_DATE_FORMAT)
                );
                input.with_file_name(file_name)
            }
            Self::Inventory => input.with_extension("csv"),
        }
    }
}

/// Write the header and rows of an extraction
pub fn write_extraction<W: Write>(
    out: W,
    result: &ExtractionResult,
    dialect: RecordDialect,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(dialect.delimiter())
        .quote_style(dialect.quote_style())
        .flexible(false)
        .from_writer(out);

    let to_error = |e: csv::Error| Error::csv_parsing("output", "Failed to write record", Some(e));

    writer.write_record(&result.columns).map_err(to_error)?;
    for row in &result.rows {
        writer.write_record(row).map_err(to_error)?;
    }

    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush CSV output", e))
}

/// Write an extraction to a file, replacing it if present
pub fn write_extraction_file(
    path: &Path,
    result: &ExtractionResult,
    dialect: RecordDialect,
) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    write_extraction(std::io::BufWriter::new(file), result, dialect)?;

    info!("Wrote {} records to {}", result.rows.len(), path.display());
    Ok(())
}
