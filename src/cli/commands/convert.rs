//! Convert command implementation
//!
//! Reads a table (or extracts one from a text source), validates every row
//! and writes the accepted records as a KML layer.

use super::shared::{RunSummary, build_extractor, load_configuration, report, setup_logging};
use crate::app::adapters::csv_reader::{CsvTableReader, read_text_file};
use crate::app::adapters::kml_writer::KmlWriter;
use crate::app::models::{Diagnostic, RawTable};
use crate::app::services::row_validator::PointPipeline;
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert command runner
///
/// 1. Set up logging and configuration
/// 2. Read the table, extracting it first for text sources
/// 3. Validate rows and write the KML layer
/// 4. Report counts and diagnostics
pub fn run_convert(args: ConvertArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet);
    info!("Starting conversion of {}", args.input.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(args.config_file.as_deref(), |config| {
        apply_cli_overrides(config, &args)
    })?;

    let (table, skipped_lines) = read_input(&args, &config)?;

    let pipeline = PointPipeline::new(args.profile.schema(), config.clone());
    let result = pipeline.run(&table)?;

    if !result.has_records() {
        return Err(Error::no_records(format!(
            "all {} rows of {} were rejected",
            result.stats.total_rows,
            args.input.display()
        )));
    }
    if !result.stats.is_successful() {
        warn!(
            "Only {:.1}% of rows were accepted",
            result.stats.success_rate()
        );
    }

    let output = args.output_path();
    let writer = KmlWriter::new(config.kml.clone());
    let document_name =
        writer.document_name(&args.fallback_title(), chrono::Local::now().date_naive());
    writer.write_file(&output, &document_name, &result.records)?;

    let mut summary = RunSummary::new(&args.input, &output);
    summary.records_written = result.records.len();
    summary.skipped_lines = skipped_lines;
    summary.diagnostics = result.diagnostics;
    summary.processing_time = start_time.elapsed();

    report(&summary, args.output_format, args.list_diagnostics())?;
    Ok(summary)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ConvertArgs) {
    if let Some(title) = &args.title {
        config.kml.title = Some(title.clone());
    }
    if let Some(icon) = &args.icon {
        config.kml.icon = Some(icon.clone());
    }
    if args.embed_icon {
        config.kml.embed_icon = true;
    }
    if args.no_range_check {
        config.validation.check_coordinate_ranges = false;
    }
    if let Some(delimiter) = args.delimiter {
        config.input.delimiter = Some(delimiter);
    }
    if let Some(region) = &args.region {
        config.wiki.region = region.clone();
    }
}

/// Table to validate, plus the lines dropped while extracting it
fn read_input(args: &ConvertArgs, config: &Config) -> Result<(RawTable, Vec<Diagnostic>)> {
    if !args.source.is_text() {
        let table = CsvTableReader::new(&config.input).read_file(&args.input)?;
        return Ok((table, Vec::new()));
    }

    let extractor = build_extractor(args.source, config)?;
    let text = read_text_file(&args.input)?;
    let mut extraction = extractor.extract(&text);
    info!(
        "Extracted {} records ({}) from {} lines",
        extraction.rows.len(),
        extractor.kind(),
        extraction.lines_read
    );

    let skipped_lines = std::mem::take(&mut extraction.diagnostics);
    Ok((extraction.into_table(), skipped_lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides() {
        let args = ConvertArgs::try_parse_from([
            "convert",
            "sites.csv",
            "--title",
            "Dolmens",
            "--icon",
            "dolmen.png",
            "--embed-icon",
            "--no-range-check",
            "--delimiter",
            ";",
            "--region",
            "Aveyron",
        ])
        .unwrap();

        let mut config = Config::default();
        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.kml.title.as_deref(), Some("Dolmens"));
        assert_eq!(config.kml.icon.as_deref(), Some("dolmen.png"));
        assert!(config.kml.embed_icon);
        assert!(!config.validation.check_coordinate_ranges);
        assert_eq!(config.input.delimiter, Some(';'));
        assert_eq!(config.wiki.region, "Aveyron");
    }

    #[test]
    fn test_no_flags_keep_configuration() {
        let args = ConvertArgs::try_parse_from(["convert", "sites.csv"]).unwrap();
        let mut config = Config::default().with_title("Depuis fichier");

        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.kml.title.as_deref(), Some("Depuis fichier"));
        assert!(config.validation.check_coordinate_ranges);
    }
}
