//! Tests for map section extraction

use super::super::Extractor;
use super::super::wiki_map::WikiMapExtractor;
use super::sample_map_article;
use crate::constants::WIKI_MAP_COLUMNS;

fn lot_extractor() -> WikiMapExtractor {
    WikiMapExtractor::new("Lot").unwrap()
}

#[test]
fn test_only_lines_inside_section_are_read() {
    let result = lot_extractor().extract(sample_map_article());

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0], vec!["Dolmen du Pech", "44.61", "1.72", "?"]);
    assert_eq!(result.rows[1][0], "Dolmen de Roques");
    assert_eq!(result.rows[1][1], "44.70");
    assert_eq!(result.lines_read, 8);
}

#[test]
fn test_unmatched_line_inside_section_is_reported() {
    let result = lot_extractor().extract(sample_map_article());

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].row_number, 6);
    assert_eq!(
        result.diagnostics[0].message,
        "Ligne ignorée dans section carte : texte libre"
    );
}

#[test]
fn test_columns() {
    let result = lot_extractor().extract("");

    assert_eq!(result.columns, WIKI_MAP_COLUMNS);
    assert!(result.rows.is_empty());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_other_region_lines_are_skipped() {
    let text = "{{Début de carte}}\n{{G|Aveyron|44.3|2.5|Dolmen|sans toponyme}}\n{{Fin de carte}}\n";
    let result = lot_extractor().extract(text);

    assert!(result.rows.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].row_number, 2);

    let aveyron = WikiMapExtractor::new("Aveyron").unwrap().extract(text);
    assert_eq!(aveyron.rows.len(), 1);
}

#[test]
fn test_point_without_absence_marker_is_skipped() {
    let text = "{{Début de carte}}\n{{G|Lot|44.3|1.5|Dolmen|Pech Merle}}\n{{Fin de carte}}\n";
    let result = lot_extractor().extract(text);

    assert!(result.rows.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn test_negative_coordinates() {
    let text = "{{Début de carte}}\n{{G|Lot|-12.5|-1.25|Site|sans toponyme}}\n{{Fin de carte}}\n";
    let result = lot_extractor().extract(text);

    assert_eq!(result.rows[0][1], "-12.5");
    assert_eq!(result.rows[0][2], "-1.25");
}

#[test]
fn test_kind() {
    assert_eq!(lot_extractor().kind(), "carte");
}
