//! Command-line argument definitions for table2kml
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::adapters::csv_writer::RecordDialect;
use crate::app::models::ColumnSchema;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for table2kml
///
/// Turns point-of-interest tables, wiki pages and cave inventory text into
/// KML map layers.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "table2kml",
    version,
    about = "Convert point-of-interest tables and texts to KML layers",
    long_about = "Reads spreadsheet exports, wiki page sources or OCR-extracted inventory text, \
                  validates every row, converts coordinates to WGS84 and writes a KML layer with \
                  one styled placemark per point. Bad rows are reported, never fatal."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate a table or text source and write a KML layer
    Convert(ConvertArgs),
    /// Extract the point table of a wiki page or inventory text to CSV
    Extract(ExtractArgs),
}

/// Kind of input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Delimited table with a header line
    Table,
    /// Map section of a wiki page source
    WikiMap,
    /// List tables of a wiki article source
    WikiList,
    /// Cave inventory text
    Inventory,
}

impl SourceKind {
    /// Whether the input goes through a text extractor first
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Table)
    }

    /// CSV flavour of the extracted records
    pub fn dialect(self) -> RecordDialect {
        match self {
            Self::Inventory => RecordDialect::Inventory,
            _ => RecordDialect::Wiki,
        }
    }
}

/// Column layout expected in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Name and coordinates mandatory, every other column described
    Generic,
    /// Dolmen inventory columns in their fixed presentation order
    Dolmen,
}

impl Profile {
    pub fn schema(self) -> ColumnSchema {
        match self {
            Self::Generic => ColumnSchema::generic(),
            Self::Dolmen => ColumnSchema::dolmen(),
        }
    }
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input table or text file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Kind of input
    #[arg(
        short = 's',
        long = "source",
        value_enum,
        default_value = "table",
        help = "Kind of input file"
    )]
    pub source: SourceKind,

    /// Column profile
    ///
    /// `generic` only requires name and coordinates and describes every
    /// other column; `dolmen` expects the dolmen inventory columns.
    #[arg(
        short = 'p',
        long = "profile",
        value_enum,
        default_value = "generic",
        help = "Expected column layout"
    )]
    pub profile: Profile,

    /// Layer title, defaults to the input file name
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Icon URL or local image path for the placemark style
    #[arg(long = "icon", value_name = "URL|PATH")]
    pub icon: Option<String>,

    /// Embed a local icon into the KML file
    #[arg(long = "embed-icon", requires = "icon")]
    pub embed_icon: bool,

    /// Accept coordinates outside the WGS84 ranges
    #[arg(long = "no-range-check")]
    pub no_range_check: bool,

    /// Force the table delimiter instead of sniffing it
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Region of the wiki map templates
    #[arg(long = "region", value_name = "NAME")]
    pub region: Option<String>,

    /// Output KML file, defaults to the input with a .kml extension
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v: list diagnostics, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Input page source or inventory text
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Kind of text
    #[arg(short = 's', long = "source", value_enum)]
    pub source: SourceKind,

    /// Region of the wiki map templates
    #[arg(long = "region", value_name = "NAME")]
    pub region: Option<String>,

    /// Output CSV file
    ///
    /// Defaults to wikipedia_fr_<kind>_<date>.csv next to the input for wiki
    /// sources and to the input with a .csv extension for the inventory.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v: list diagnostics, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Map `-v`/`-q` to a tracing level
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn check_file(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "{} does not exist or is not a file: {}",
            what,
            path.display()
        )));
    }
    Ok(())
}

impl ConvertArgs {
    /// Validate the convert arguments for consistency
    pub fn validate(&self) -> Result<()> {
        check_file(&self.input, "Input")?;

        if let Some(config_file) = &self.config_file {
            check_file(config_file, "Config file")?;
        }

        if self.source.is_text() && self.delimiter.is_some() {
            return Err(Error::configuration(
                "--delimiter only applies to table input",
            ));
        }

        if self.output.as_deref() == Some(self.input.as_path()) {
            return Err(Error::configuration("Output would overwrite the input"));
        }

        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Whether every diagnostic is listed in the summary
    pub fn list_diagnostics(&self) -> bool {
        self.verbose > 0
    }

    /// Output KML path
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("kml"))
    }

    /// Title used when none is configured
    pub fn fallback_title(&self) -> String {
        self.input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| crate::constants::DEFAULT_LAYER_TITLE.to_string())
    }
}

impl ExtractArgs {
    /// Validate the extract arguments for consistency
    pub fn validate(&self) -> Result<()> {
        check_file(&self.input, "Input")?;

        if let Some(config_file) = &self.config_file {
            check_file(config_file, "Config file")?;
        }

        if !self.source.is_text() {
            return Err(Error::unsupported_input(
                self.input.display().to_string(),
                "extraction needs a wiki-map, wiki-list or inventory source",
            ));
        }

        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Whether every diagnostic is listed in the summary
    pub fn list_diagnostics(&self) -> bool {
        self.verbose > 0
    }
}
