//! Wiki article list extraction
//!
//! Reads the `{| class="wikitable"` tables of a list article. Each table row
//! (`|-`) is gathered across lines, split into cells and matched against the
//! column template `name || commune || place || protection || coordinates`.
//! A coordinates cell may hold several `<br>`-separated positions, each
//! becoming its own record.

use super::Extractor;
use super::markup::{parse_wiki_text, split_line_breaks, strip_cell_attributes, strip_refs};
use super::patterns::{try_parse_coordinates, try_parse_labelled_entry};
use super::stats::ExtractionResult;
use crate::app::models::Diagnostic;
use crate::constants::WIKI_LIST_COLUMNS;
use crate::constants::inventory::SUB_ENTRY_SEPARATOR;
use crate::constants::messages::{
    COORDINATES_UNREADABLE, LIST_ROW_SKIPPED, LIST_ROW_TOO_SHORT, LIST_ROW_WITHOUT_COORDINATES,
    LIST_ROW_WITHOUT_NAME,
};
use crate::constants::wiki::{
    CELL_SEPARATOR, HEADER_CELL_MARKER, LIST_END_MARKER, LIST_START_MARKER, ROW_START_MARKER,
};
use tracing::{debug, info};

const TEMPLATE_CELLS: usize = 5;
const REMARK_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListState {
    Outside,
    InsideList,
    InsideRow {
        start_line: usize,
        fragments: Vec<String>,
    },
}

/// Extracts rows of article list tables
#[derive(Debug, Clone, Default)]
pub struct WikiListExtractor;

impl WikiListExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Turn one gathered table row into records, or a diagnostic
    fn process_row(&self, start_line: usize, fragments: &[String], result: &mut ExtractionResult) {
        if fragments.is_empty() {
            return;
        }

        let joined = fragments.join(CELL_SEPARATOR);
        match self.parse_row(&joined) {
            Ok(rows) => {
                debug!("Line {}: {} records from table row", start_line, rows.len());
                for row in rows {
                    result.push_row(row);
                }
            }
            Err(reason) => result.push_diagnostic(Diagnostic::new(
                start_line,
                format!("{} : {} : {}", LIST_ROW_SKIPPED, reason, joined),
            )),
        }
    }

    fn parse_row(&self, joined: &str) -> Result<Vec<Vec<String>>, String> {
        let (cleaned, remarks) = strip_refs(joined);
        let cells: Vec<&str> = cleaned
            .split(CELL_SEPARATOR)
            .map(strip_cell_attributes)
            .collect();

        if cells.len() < TEMPLATE_CELLS {
            return Err(LIST_ROW_TOO_SHORT.to_string());
        }

        let name = parse_wiki_text(cells[0]).text;
        if name.is_empty() {
            return Err(LIST_ROW_WITHOUT_NAME.to_string());
        }
        let commune = parse_wiki_text(cells[1]).text;
        let place = parse_wiki_text(cells[2]).text;
        let protection = parse_wiki_text(cells[3]).text;
        let remarks = remarks.join(REMARK_SEPARATOR);

        let entries = split_line_breaks(cells[4]);
        if entries.is_empty() {
            return Err(LIST_ROW_WITHOUT_COORDINATES.to_string());
        }

        // Any unreadable entry discards the whole row
        entries
            .iter()
            .map(|entry| -> Result<Vec<String>, String> {
                let (label, coordinates) = match try_parse_coordinates(entry) {
                    Some(position) => (None, position),
                    None => {
                        let (label, rest) = try_parse_labelled_entry(entry)
                            .ok_or_else(|| format!("{} : {}", COORDINATES_UNREADABLE, entry))?;
                        let position = try_parse_coordinates(&rest)
                            .ok_or_else(|| format!("{} : {}", COORDINATES_UNREADABLE, entry))?;
                        (Some(parse_wiki_text(&label).text), position)
                    }
                };

                let entry_name = match label {
                    Some(label) if !label.is_empty() => {
                        format!("{}{}{}", name, SUB_ENTRY_SEPARATOR, label)
                    }
                    _ => name.clone(),
                };

                Ok(vec![
                    entry_name,
                    coordinates.latitude.to_string(),
                    coordinates.longitude.to_string(),
                    commune.clone(),
                    place.clone(),
                    protection.clone(),
                    remarks.clone(),
                ])
            })
            .collect()
    }
}

impl Extractor for WikiListExtractor {
    fn kind(&self) -> &'static str {
        "liste"
    }

    fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new(WIKI_LIST_COLUMNS);
        let mut state = ListState::Outside;

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            result.lines_read += 1;

            state = match state {
                ListState::Outside if line.starts_with(LIST_START_MARKER) => {
                    debug!("Table starts at line {}", line_number);
                    ListState::InsideList
                }
                ListState::Outside => ListState::Outside,

                ListState::InsideList if line.starts_with(ROW_START_MARKER) => {
                    ListState::InsideRow {
                        start_line: line_number,
                        fragments: Vec::new(),
                    }
                }
                ListState::InsideList if line.starts_with(LIST_END_MARKER) => ListState::Outside,
                ListState::InsideList => ListState::InsideList,

                ListState::InsideRow {
                    start_line,
                    fragments,
                } => {
                    if line.starts_with(ROW_START_MARKER) {
                        self.process_row(start_line, &fragments, &mut result);
                        ListState::InsideRow {
                            start_line: line_number,
                            fragments: Vec::new(),
                        }
                    } else if line.starts_with(LIST_END_MARKER) {
                        self.process_row(start_line, &fragments, &mut result);
                        debug!("Table ends at line {}", line_number);
                        ListState::Outside
                    } else {
                        ListState::InsideRow {
                            start_line,
                            fragments: push_fragment(fragments, line),
                        }
                    }
                }
            };
        }

        // Unterminated table
        if let ListState::InsideRow {
            start_line,
            fragments,
        } = state
        {
            self.process_row(start_line, &fragments, &mut result);
        }

        info!(
            "{} records read in list tables, {} rows skipped",
            result.rows.len(),
            result.diagnostics.len()
        );
        result
    }
}

/// Add one row line: `|` opens a cell, `!` header cells are dropped,
/// anything else continues the previous cell
fn push_fragment(mut fragments: Vec<String>, line: &str) -> Vec<String> {
    if line.starts_with(HEADER_CELL_MARKER) || line.starts_with("|+") {
        return fragments;
    }

    if let Some(cell) = line.strip_prefix('|') {
        fragments.push(cell.trim().to_string());
    } else if let Some(last) = fragments.last_mut() {
        if !line.is_empty() {
            last.push(' ');
            last.push_str(line);
        }
    }

    fragments
}
