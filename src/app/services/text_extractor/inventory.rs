//! Cave inventory text extraction
//!
//! The inventory is a PDF book converted to text. Each entry looks like:
//!
//! ```text
//! ABOIS, Perte de l' - Commune d'Assier
//! 564,50 - 263,47 - 310m (IGN 2138 E)
//! Description lines ... Plan 12.
//! ```
//!
//! An entry may list several entrances, each on its own coordinate line
//! with a label, and every entrance becomes its own record. Page numbers,
//! cross-references and repeated titles are interleaved with the entries.

use super::Extractor;
use super::patterns::{
    CoordinateLine, EntryLine, is_cross_reference, try_parse_entry, try_parse_full_coordinates,
    try_parse_ign_sheet, try_parse_page, try_parse_plan, try_parse_sub_coordinates,
    try_parse_title,
};
use super::stats::ExtractionResult;
use crate::app::models::Diagnostic;
use crate::app::services::coordinates::lambert3_to_wgs84;
use crate::constants::INVENTORY_COLUMNS;
use crate::constants::inventory::SUB_ENTRY_SEPARATOR;
use crate::constants::messages::{
    COORDINATE_MISPLACED, ENTRY_WITHOUT_COORDINATES, ENTRY_WITHOUT_DESCRIPTION,
    SUB_COORDINATE_MISPLACED, TITLE_MISPLACED,
};
use crate::constants::LINE_BREAK;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InventoryState {
    /// Before the first entry, or after an IGN line with nothing pending
    WaitingEntry,
    /// Entry line read, coordinates expected
    WaitingCoordinate,
    /// At least one coordinate line read
    ReadingCoordinates,
    /// Description lines being accumulated
    ReadingDescription,
}

impl InventoryState {
    fn accepts_coordinates(self) -> bool {
        matches!(self, Self::WaitingCoordinate | Self::ReadingCoordinates)
    }

    fn accepts_description(self) -> bool {
        matches!(self, Self::ReadingCoordinates | Self::ReadingDescription)
    }
}

/// Entry being accumulated
#[derive(Debug, Clone)]
struct PendingEntry {
    line_number: usize,
    /// Page the entry starts on
    page: u32,
    entry: EntryLine,
    ign_sheet: String,
    entrances: Vec<CoordinateLine>,
    description: String,
    plan: String,
}

impl PendingEntry {
    fn new(line_number: usize, page: u32, entry: EntryLine) -> Self {
        Self {
            line_number,
            page,
            entry,
            ign_sheet: String::new(),
            entrances: Vec::new(),
            description: String::new(),
            plan: String::new(),
        }
    }

    /// Qualifier and name, without a space after an apostrophe
    fn full_name(&self) -> String {
        let qualifier = &self.entry.qualifier;
        if qualifier.is_empty() {
            self.entry.name.clone()
        } else if qualifier.ends_with('\'') || qualifier.ends_with('’') {
            format!("{}{}", qualifier, self.entry.name)
        } else {
            format!("{} {}", qualifier, self.entry.name)
        }
    }
}

/// Extracts cave records from inventory text
#[derive(Debug, Clone, Default)]
pub struct InventoryExtractor;

impl InventoryExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Emit one row per entrance, or a diagnostic for an incomplete entry
    fn flush(&self, pending: PendingEntry, result: &mut ExtractionResult) {
        let name = pending.full_name();

        if pending.description.is_empty() {
            warn!("Line {}: entry '{}' has no description", pending.line_number, name);
            result.push_diagnostic(Diagnostic::new(
                pending.line_number,
                format!("{} : {}", ENTRY_WITHOUT_DESCRIPTION, name),
            ));
            return;
        }
        if pending.entrances.is_empty() {
            warn!("Line {}: entry '{}' has no coordinates", pending.line_number, name);
            result.push_diagnostic(Diagnostic::new(
                pending.line_number,
                format!("{} : {}", ENTRY_WITHOUT_COORDINATES, name),
            ));
            return;
        }

        let description = pending
            .description
            .strip_suffix(LINE_BREAK)
            .unwrap_or(&pending.description);

        for entrance in &pending.entrances {
            let entrance_name = if entrance.sub_name.is_empty() {
                name.clone()
            } else {
                format!("{}{}{}", name, SUB_ENTRY_SEPARATOR, entrance.sub_name)
            };
            let (longitude, latitude) = lambert3_to_wgs84(entrance.x, entrance.y);

            result.push_row(vec![
                entrance_name,
                pending.entry.alias.clone(),
                pending.entry.commune.clone(),
                pending.ign_sheet.clone(),
                format!("{:.2}", entrance.x / 1000.0),
                format!("{:.2}", entrance.y / 1000.0),
                latitude.to_string(),
                longitude.to_string(),
                entrance.altitude.clone(),
                description.to_string(),
                pending.page.to_string(),
                pending.plan.clone(),
            ]);
        }

        debug!(
            "Line {}: '{}' written with {} entrances",
            pending.line_number,
            name,
            pending.entrances.len()
        );
    }
}

impl Extractor for InventoryExtractor {
    fn kind(&self) -> &'static str {
        "inventaire"
    }

    fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new(INVENTORY_COLUMNS);
        let mut state = InventoryState::WaitingEntry;
        let mut pending: Option<PendingEntry> = None;
        let mut page = 0u32;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            result.lines_read += 1;

            if let Some(title) = try_parse_title(line) {
                if line_number == 1 {
                    debug!("Inventory title found: {}", title);
                } else {
                    result.push_diagnostic(Diagnostic::new(
                        line_number,
                        format!("{} : {}", TITLE_MISPLACED, title),
                    ));
                }
                continue;
            }

            if is_cross_reference(line) {
                continue;
            }

            if let Some(number) = try_parse_page(line) {
                // OCR sometimes reads other numbers as page numbers
                if number > page {
                    debug!("Line {}: page {}", line_number, number);
                    page = number;
                }
                continue;
            }

            if let Some(entry) = try_parse_entry(line) {
                if let Some(previous) = pending.take() {
                    self.flush(previous, &mut result);
                }
                debug!(
                    "Line {}: entry '{}' in {}",
                    line_number, entry.name, entry.commune
                );
                pending = Some(PendingEntry::new(line_number, page, entry));
                state = InventoryState::WaitingCoordinate;
                continue;
            }

            if let Some(coordinates) = try_parse_full_coordinates(line) {
                match pending.as_mut() {
                    Some(current) if state.accepts_coordinates() => {
                        current.ign_sheet = coordinates.ign_sheet.clone().unwrap_or_default();
                        current.entrances = vec![coordinates];
                        state = InventoryState::ReadingCoordinates;
                    }
                    _ => result.push_diagnostic(Diagnostic::new(
                        line_number,
                        format!("{} : {}", COORDINATE_MISPLACED, line),
                    )),
                }
                continue;
            }

            if let Some(coordinates) = try_parse_sub_coordinates(line) {
                match pending.as_mut() {
                    Some(current) if state.accepts_coordinates() => {
                        if let Some(sheet) = &coordinates.ign_sheet {
                            current.ign_sheet = sheet.clone();
                        }
                        current.entrances.push(coordinates);
                        state = InventoryState::ReadingCoordinates;
                    }
                    _ => result.push_diagnostic(Diagnostic::new(
                        line_number,
                        format!("{} : {}", SUB_COORDINATE_MISPLACED, line),
                    )),
                }
                continue;
            }

            if let Some(sheet) = try_parse_ign_sheet(line) {
                if let Some(current) = pending.as_mut() {
                    current.ign_sheet = sheet;
                    state = InventoryState::ReadingDescription;
                }
                continue;
            }

            let content = line.trim();
            if content.is_empty() || !state.accepts_description() {
                continue;
            }
            if let Some(current) = pending.as_mut() {
                current.description.push_str(content);
                current.description.push_str(LINE_BREAK);
                if let Some(plan) = try_parse_plan(content) {
                    current.plan = plan;
                }
                state = InventoryState::ReadingDescription;
            }
        }

        if let Some(last) = pending.take() {
            self.flush(last, &mut result);
        }

        info!(
            "{} cave records extracted, {} diagnostics",
            result.rows.len(),
            result.diagnostics.len()
        );
        result
    }
}
