//! Extract command implementation
//!
//! Runs a text extractor and writes its records as a delimited file for
//! review before conversion.

use super::shared::{RunSummary, build_extractor, load_configuration, report, setup_logging};
use crate::app::adapters::csv_reader::read_text_file;
use crate::app::adapters::csv_writer::write_extraction_file;
use crate::cli::args::ExtractArgs;
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Extract command runner
pub fn run_extract(args: ExtractArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet);
    info!("Starting extraction of {}", args.input.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(args.config_file.as_deref(), |config| {
        if let Some(region) = &args.region {
            config.wiki.region = region.clone();
        }
    })?;

    let extractor = build_extractor(args.source, &config)?;
    let text = read_text_file(&args.input)?;
    let extraction = extractor.extract(&text);

    let dialect = args.source.dialect();
    let output = args.output.clone().unwrap_or_else(|| {
        dialect.default_output_path(
            &args.input,
            extractor.kind(),
            chrono::Local::now().date_naive(),
        )
    });
    write_extraction_file(&output, &extraction, dialect)?;

    let mut summary = RunSummary::new(&args.input, &output);
    summary.records_written = extraction.rows.len();
    summary.skipped_lines = extraction.diagnostics;
    summary.processing_time = start_time.elapsed();

    report(&summary, args.output_format, args.list_diagnostics())?;
    Ok(summary)
}
