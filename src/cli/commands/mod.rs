//! Command implementations for the table2kml CLI
//!
//! Each command lives in its own module:
//! - `convert`: table or text source to KML layer
//! - `extract`: text source to delimited record list

pub mod convert;
pub mod extract;
pub mod shared;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the subcommand handler
pub fn run(args: Args) -> Result<RunSummary> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::run_convert(convert_args),
        Some(Commands::Extract(extract_args)) => extract::run_extract(extract_args),
        None => Err(Error::configuration("No command given")),
    }
}
