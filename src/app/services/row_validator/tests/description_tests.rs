//! Tests for description rendering

use super::super::description::{
    DescriptionBuilder, StatusFlag, decode_status, format_degrees, format_url, short_url_label,
};
use super::row;
use crate::app::models::{ColumnBinding, FieldKind, RawRow};
use crate::config::DescriptionConfig;

fn binding(header: &str, kind: FieldKind, column_index: usize) -> ColumnBinding {
    ColumnBinding {
        logical_name: header.to_string(),
        kind,
        physical_header: header.to_string(),
        column_index,
    }
}

fn builder() -> DescriptionBuilder {
    DescriptionBuilder::new(DescriptionConfig::default())
}

#[test]
fn test_heading_only_when_nothing_populated() {
    let columns = vec![binding("Remarque", FieldKind::Text, 0)];
    let description = builder().build(&columns, &row(&["  "]), 44.5, 1.5);

    assert_eq!(description, "<h1>Informations</h1>\n");
}

#[test]
fn test_text_and_placeholder() {
    let columns = vec![
        binding("Remarque", FieldKind::Text, 0),
        binding("Lieu", FieldKind::Text, 1),
    ];
    let description = builder().build(&columns, &row(&[" Beau site ", "?"]), 44.5, 1.5);

    assert_eq!(
        description,
        "<h1>Informations</h1>\n<b>Remarque</b> : Beau site<br/>\n"
    );
}

#[test]
fn test_commune_link() {
    let columns = vec![binding("Commune", FieldKind::Commune, 0)];
    let description = builder().build(&columns, &row(&["Cahors"]), 44.5, 1.5);

    assert_eq!(
        description,
        "<h1>Informations</h1>\n<b>Commune</b> : \
         <a href=\"https://fr.wikipedia.org/wiki/Cahors\" target=\"_blank\">Cahors</a><br/>\n"
    );
}

#[test]
fn test_coordinates_show_normalized_values() {
    let columns = vec![
        binding("Lat", FieldKind::Latitude, 0),
        binding("Lon", FieldKind::Longitude, 1),
    ];
    let description = builder().build(&columns, &row(&["44°30'00\"", "1.5"]), 44.5, 1.5);

    assert_eq!(
        description,
        "<h1>Informations</h1>\n<b>Lat</b> : 44.5<br/>\n<b>Lon</b> : 1.5<br/>\n"
    );
}

#[test]
fn test_whole_degree_coordinates_keep_fraction() {
    let columns = vec![
        binding("Lat", FieldKind::Latitude, 0),
        binding("Lon", FieldKind::Longitude, 1),
    ];
    let description = builder().build(&columns, &row(&["44°00'00\"", "-2"]), 44.0, -2.0);

    assert_eq!(
        description,
        "<h1>Informations</h1>\n<b>Lat</b> : 44.0<br/>\n<b>Lon</b> : -2.0<br/>\n"
    );
}

#[test]
fn test_format_degrees() {
    assert_eq!(format_degrees(44.0), "44.0");
    assert_eq!(format_degrees(0.0), "0.0");
    assert_eq!(format_degrees(1.847), "1.847");
    assert_eq!(format_degrees(-0.5), "-0.5");
}

#[test]
fn test_status_code_list() {
    let columns = vec![binding("Etat", FieldKind::StatusCode, 0)];
    let description = builder().build(&columns, &row(&["C1OT"]), 44.5, 1.5);

    assert_eq!(
        description,
        "<h1>Informations</h1>\n<b>Etat</b> : \n<ul>\n\
         <li>* Dalle de couverture présente</li>\n\
         <li>* Un seul orthostat</li>\n\
         <li>* Tumulus présent</li>\n\
         </ul>\n"
    );
}

#[test]
fn test_decode_status() {
    assert_eq!(
        decode_status("(C)O"),
        vec![StatusFlag::CapstoneMoved, StatusFlag::OrthostatsPresent]
    );
    assert_eq!(decode_status("ro"), vec![StatusFlag::OrthostatRemains]);
    assert_eq!(decode_status("c"), vec![StatusFlag::CapstoneRemains]);
    assert_eq!(
        decode_status("Tt?"),
        vec![
            StatusFlag::TumulusPresent,
            StatusFlag::CapstoneRemains,
            StatusFlag::Undetermined
        ]
    );
    assert!(decode_status("").is_empty());
    assert_eq!(StatusFlag::Undetermined.label(), "Indéterminé");
}

#[test]
fn test_web_link_shortened() {
    let columns = vec![binding("URL", FieldKind::WebLink, 0)];
    let description = builder().build(
        &columns,
        &row(&["http://www.dolmens.fr/site.php?id=42"]),
        44.5,
        1.5,
    );

    assert!(description.contains(
        "<a href=\"http://www.dolmens.fr/site.php?id=42\" target=\"_blank\">id=42 (www.dolmens.fr)</a><br/>\n"
    ));
}

#[test]
fn test_web_link_fallback_label() {
    let columns = vec![binding("URL", FieldKind::WebLink, 0)];
    let description = builder().build(&columns, &row(&["http://example.com"]), 44.5, 1.5);

    assert!(description.contains(">Infos WEB</a><br/>\n"));
}

#[test]
fn test_hyperlink_override_wins() {
    let columns = vec![binding("Fiche", FieldKind::Text, 0)];
    let row = RawRow::new(vec!["voir fiche".to_string()])
        .with_link(0, "https://megalithes.org/fiches/dolmen_12");
    let description = builder().build(&columns, &row, 44.5, 1.5);

    assert!(description.contains(
        "<b>Fiche</b> : <a href=\"https://megalithes.org/fiches/dolmen_12\" target=\"_blank\">dolmen_12 (megalithes.org)</a>"
    ));
}

#[test]
fn test_short_url_label() {
    assert_eq!(
        short_url_label("https://www.openstreetmap.org/node/123456").as_deref(),
        Some("123456 (www.openstreetmap.org)")
    );
    assert_eq!(short_url_label("https://example.com"), None);
    assert_eq!(short_url_label("ftp://example.com/a"), None);
}

#[test]
fn test_format_url_without_shape() {
    assert_eq!(
        format_url("http://example.com"),
        "<a href=\"http://example.com\" target=\"_blank\">http://example.com</a>"
    );
}
