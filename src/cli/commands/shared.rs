//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, extractor selection and the run
//! report used by both commands.

use crate::app::models::Diagnostic;
use crate::app::services::text_extractor::{
    Extractor, InventoryExtractor, WikiListExtractor, WikiMapExtractor,
};
use crate::cli::args::{OutputFormat, SourceKind};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of one command run, reported on stdout
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Records written to the output
    pub records_written: usize,
    /// Text lines or entries dropped by an extractor
    pub skipped_lines: Vec<Diagnostic>,
    /// Table rows rejected by validation
    pub diagnostics: Vec<Diagnostic>,
    #[serde(serialize_with = "serialize_seconds")]
    pub processing_time: Duration,
}

fn serialize_seconds<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl RunSummary {
    pub fn new(input: &Path, output: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            ..Self::default()
        }
    }

    /// Rows and lines that did not make it to the output
    pub fn total_skipped(&self) -> usize {
        self.skipped_lines.len() + self.diagnostics.len()
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from `-v`/`-q`.
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("table2kml={}", log_level)));

    let initialized = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load the file configuration and let `overrides` apply command flags
pub fn load_configuration(
    config_file: Option<&Path>,
    overrides: impl FnOnce(&mut Config),
) -> Result<Config> {
    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, trying the default location"),
    }

    let mut config = Config::load(config_file)?;
    overrides(&mut config);
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Extractor for a text source
pub fn build_extractor(source: SourceKind, config: &Config) -> Result<Box<dyn Extractor>> {
    let extractor: Box<dyn Extractor> = match source {
        SourceKind::WikiMap => Box::new(WikiMapExtractor::new(&config.wiki.region)?),
        SourceKind::WikiList => Box::new(WikiListExtractor::new()),
        SourceKind::Inventory => Box::new(InventoryExtractor::new()),
        SourceKind::Table => {
            return Err(Error::configuration(
                "A delimited table is read directly, not extracted",
            ));
        }
    };
    Ok(extractor)
}

/// Print the run summary in the requested format
pub fn report(summary: &RunSummary, format: OutputFormat, list_diagnostics: bool) -> Result<()> {
    match format {
        OutputFormat::Human => {
            print_human_report(summary, list_diagnostics);
            Ok(())
        }
        OutputFormat::Json => print_json_report(summary),
    }
}

fn print_human_report(summary: &RunSummary, list_diagnostics: bool) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!("   • Input: {}", summary.input.display());
    println!("   • Output: {}", summary.output.display());
    println!(
        "   • Records written: {}",
        summary.records_written.to_string().bright_white().bold()
    );

    let skipped = summary.total_skipped().to_string();
    if summary.total_skipped() > 0 {
        println!("   • Skipped: {}", skipped.bright_yellow().bold());
    } else {
        println!("   • Skipped: {}", skipped);
    }
    println!(
        "   • Processing time: {:.2}s",
        summary.processing_time.as_secs_f64()
    );

    if list_diagnostics {
        for diagnostic in summary.skipped_lines.iter().chain(&summary.diagnostics) {
            println!("   {}", diagnostic.to_string().yellow());
        }
    }
    println!();
}

fn print_json_report(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| Error::configuration(format!("Failed to serialize summary: {}", e)))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::new(Path::new("a.csv"), Path::new("a.kml"));
        summary.records_written = 3;
        summary.skipped_lines.push(Diagnostic::new(4, "ligne ignorée"));
        summary
            .diagnostics
            .push(Diagnostic::for_field(2, "Nom", "champ Nom vide"));

        assert_eq!(summary.total_skipped(), 2);
    }

    #[test]
    fn test_summary_json() {
        let mut summary = RunSummary::new(Path::new("a.csv"), Path::new("a.kml"));
        summary
            .diagnostics
            .push(Diagnostic::for_field(2, "Nom", "champ Nom vide"));
        summary.processing_time = Duration::from_millis(1500);

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&summary).unwrap()).unwrap();

        assert_eq!(json["records_written"], 0);
        assert_eq!(json["processing_time"], 1.5);
        assert_eq!(json["diagnostics"][0]["row_number"], 2);
        assert_eq!(json["diagnostics"][0]["field"], "Nom");
    }

    #[test]
    fn test_load_configuration_applies_overrides() {
        let config = load_configuration(None, |config| {
            config.kml.title = Some("Dolmens".to_string());
        });

        assert_eq!(config.unwrap().kml.title.as_deref(), Some("Dolmens"));
    }

    #[test]
    fn test_build_extractor() {
        let config = Config::default();

        assert_eq!(
            build_extractor(SourceKind::WikiMap, &config).unwrap().kind(),
            "carte"
        );
        assert_eq!(
            build_extractor(SourceKind::Inventory, &config).unwrap().kind(),
            "inventaire"
        );
        assert!(build_extractor(SourceKind::Table, &config).is_err());
    }
}
