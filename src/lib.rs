//! table2kml Library
//!
//! A Rust library for turning point-of-interest tables, wiki markup and
//! OCR-extracted inventory text into KML map layers.
//!
//! This library provides tools for:
//! - Resolving loosely named spreadsheet/CSV columns by prefix
//! - Parsing decimal and sexagesimal angles, and converting Lambert III
//!   planar coordinates to WGS84
//! - Validating rows and building HTML descriptions, collecting per-row
//!   diagnostics instead of aborting the batch
//! - Extracting point records from wiki map sections, wiki article lists and
//!   cave inventory text
//! - Writing KML placemark layers and delimited record lists

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod column_resolver;
        pub mod coordinates;
        pub mod row_validator;
        pub mod text_extractor;
    }
    pub mod adapters {
        pub mod csv_reader;
        pub mod csv_writer;
        pub mod kml_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Diagnostic, PointRecord, RawRow, RawTable};
pub use app::services::column_resolver::SchemaError;
pub use config::Config;

/// Result type alias for table2kml
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for conversion runs
///
/// Row-level problems never show up here: they are collected as
/// [`Diagnostic`]s. Everything in this enum stops the run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input table does not have the expected columns
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// KML serialization error
    #[error("KML writing error: {message}")]
    KmlWriting { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input file kind not handled
    #[error("Unsupported input '{path}': {reason}")]
    UnsupportedInput { path: String, reason: String },

    /// Nothing left to write after validation
    #[error("No records to write: {reason}")]
    NoRecords { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a KML writing error
    pub fn kml_writing(message: impl Into<String>) -> Self {
        Self::KmlWriting {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unsupported input error
    pub fn unsupported_input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a no-records error
    pub fn no_records(reason: impl Into<String>) -> Self {
        Self::NoRecords {
            reason: reason.into(),
        }
    }

    /// Whether the error comes from the shape of the input table
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}
