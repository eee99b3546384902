//! Tests for per-row validation

use super::super::validator::RowValidator;
use super::row;
use crate::app::models::ColumnSchema;
use crate::app::services::column_resolver::resolve;
use crate::config::Config;

fn validator(headers: &[&str], config: &Config) -> RowValidator {
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let columns = resolve(&headers, &ColumnSchema::generic()).unwrap();
    RowValidator::new(columns, config)
}

#[test]
fn test_valid_row() {
    let validator = validator(&["Nom du site", "Lat", "Lon", "Commune"], &Config::default());
    let record = validator
        .validate(&row(&["Dolmen de la Pierre", "44.5", "1.25", "Cahors"]), 3)
        .unwrap();

    assert_eq!(record.row_number, 3);
    assert_eq!(record.name, "Dolmen de la Pierre");
    assert_eq!(record.commune, "Cahors");
    assert_eq!(record.latitude, 44.5);
    assert_eq!(record.longitude, 1.25);
    assert!(record.description.starts_with("<h1>Informations</h1>\n"));
}

#[test]
fn test_empty_name() {
    let validator = validator(&["Nom du site", "Lat", "Lon"], &Config::default());
    let diagnostic = validator
        .validate(&row(&["  ", "44.5", "1.25"]), 2)
        .unwrap_err();

    assert_eq!(diagnostic.row_number, 2);
    assert_eq!(diagnostic.field.as_deref(), Some("Nom du site"));
    assert_eq!(diagnostic.message, "champ Nom du site vide");
}

#[test]
fn test_empty_latitude() {
    let validator = validator(&["Nom", "Lat (WGS84)", "Lon"], &Config::default());
    let diagnostic = validator.validate(&row(&["Site", "", "1.25"]), 1).unwrap_err();

    assert_eq!(diagnostic.message, "champ Lat (WGS84) vide");
}

#[test]
fn test_short_row_reports_missing_coordinate() {
    let validator = validator(&["Nom", "Lat", "Lon"], &Config::default());
    let diagnostic = validator.validate(&row(&["Site", "44.5"]), 4).unwrap_err();

    assert_eq!(diagnostic.message, "champ Lon vide");
}

#[test]
fn test_invalid_longitude() {
    let validator = validator(&["Nom", "Lat", "Lon"], &Config::default());
    let diagnostic = validator
        .validate(&row(&["Site", "44.5", "1,25"]), 1)
        .unwrap_err();

    assert_eq!(diagnostic.field.as_deref(), Some("Lon"));
    assert_eq!(diagnostic.message, "champ Lon incorrect : 1,25");
}

#[test]
fn test_latitude_checked_before_longitude() {
    let validator = validator(&["Nom", "Lat", "Lon"], &Config::default());
    let diagnostic = validator.validate(&row(&["Site", "x", "y"]), 1).unwrap_err();

    assert_eq!(diagnostic.message, "champ Lat incorrect : x");
}

#[test]
fn test_out_of_range_coordinate() {
    let validator = validator(&["Nom", "Lat", "Lon"], &Config::default());
    let diagnostic = validator
        .validate(&row(&["Site", "94.5", "1.25"]), 1)
        .unwrap_err();

    assert_eq!(diagnostic.message, "champ Lat hors limites : 94.5");
}

#[test]
fn test_range_check_can_be_disabled() {
    let config = Config::default().without_range_check();
    let validator = validator(&["Nom", "Lat", "Lon"], &config);
    let record = validator
        .validate(&row(&["Site", "94.5", "181"]), 1)
        .unwrap();

    assert_eq!(record.latitude, 94.5);
    assert_eq!(record.longitude, 181.0);
}

#[test]
fn test_sexagesimal_coordinates() {
    let validator = validator(&["Nom", "Lat", "Lon"], &Config::default());
    let record = validator
        .validate(&row(&["Site", "44°30'00\"", "1°45'00\""]), 1)
        .unwrap();

    assert!((record.latitude - 44.5).abs() < 1e-9);
    assert!((record.longitude - 1.75).abs() < 1e-9);
}

#[test]
fn test_placeholder_commune_left_empty() {
    let validator = validator(&["Nom", "Lat", "Lon", "Commune"], &Config::default());
    let record = validator
        .validate(&row(&["Site", "44.5", "1.5", "?"]), 1)
        .unwrap();

    assert_eq!(record.commune, "");
    assert!(!record.description.contains("Commune"));
}

#[test]
fn test_no_commune_column() {
    let validator = validator(&["Nom", "Lat", "Lon"], &Config::default());
    let record = validator.validate(&row(&["Site", "44.5", "1.5"]), 1).unwrap();

    assert_eq!(record.commune, "");
}
