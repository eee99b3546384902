//! Wiki map section extraction
//!
//! The map section of an article lists one `{{G|...}}` template per point
//! between `{{Début de carte}}` and `{{Fin de carte}}`. Lines outside the
//! section are ignored; lines inside it that are not a point template are
//! reported.

use super::patterns::MapLinePattern;
use super::stats::ExtractionResult;
use super::Extractor;
use crate::Result;
use crate::app::models::Diagnostic;
use crate::constants::messages::MAP_LINE_SKIPPED;
use crate::constants::wiki::{MAP_END_MARKER, MAP_START_MARKER, UNKNOWN_COMMUNE};
use crate::constants::WIKI_MAP_COLUMNS;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapState {
    Outside,
    InsideMap,
}

/// Extracts map section points
#[derive(Debug, Clone)]
pub struct WikiMapExtractor {
    pattern: MapLinePattern,
}

impl WikiMapExtractor {
    /// Extractor for map templates of the given region
    pub fn new(region: &str) -> Result<Self> {
        Ok(Self {
            pattern: MapLinePattern::new(region)?,
        })
    }
}

impl Extractor for WikiMapExtractor {
    fn kind(&self) -> &'static str {
        "carte"
    }

    fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new(WIKI_MAP_COLUMNS);
        let mut state = MapState::Outside;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            result.lines_read += 1;

            state = match state {
                MapState::Outside if line.contains(MAP_START_MARKER) => {
                    debug!("Map section starts at line {}", line_number);
                    MapState::InsideMap
                }
                MapState::Outside => MapState::Outside,
                MapState::InsideMap if line.contains(MAP_END_MARKER) => {
                    debug!("Map section ends at line {}", line_number);
                    MapState::Outside
                }
                MapState::InsideMap => {
                    match self.pattern.try_parse_map_line(line) {
                        Some(point) => result.push_row(vec![
                            point.name,
                            point.latitude,
                            point.longitude,
                            UNKNOWN_COMMUNE.to_string(),
                        ]),
                        None => result.push_diagnostic(Diagnostic::new(
                            line_number,
                            format!("{} : {}", MAP_LINE_SKIPPED, line),
                        )),
                    }
                    MapState::InsideMap
                }
            };
        }

        info!(
            "{} points read in map section, {} lines skipped",
            result.rows.len(),
            result.diagnostics.len()
        );
        result
    }
}
