//! End-to-end tests through the public API
//!
//! Each test drives a complete run: a source file on disk, the reader or
//! extractor, the validation pipeline and the output writer.

use chrono::NaiveDate;
use table2kml::app::adapters::csv_reader::{CsvTableReader, read_text_file};
use table2kml::app::adapters::csv_writer::{RecordDialect, write_extraction_file};
use table2kml::app::adapters::kml_writer::KmlWriter;
use table2kml::app::models::ColumnSchema;
use table2kml::app::services::row_validator::PointPipeline;
use table2kml::app::services::text_extractor::{
    Extractor, InventoryExtractor, WikiListExtractor, WikiMapExtractor,
};
use table2kml::{Config, Error};
use tempfile::TempDir;

const DOLMEN_TABLE: &str = "\
Nom;Lat;Lon;Lieu;Commune;Etat;Tumulus;Orthostats;Table;Classement;Détails;URL;OSM
Dolmen de la Pierre Martine;44.633;1.847;Causse;Livernon;CTO;oui;4;1;MH 1889;;http://www.dolmens.fr/fiche.php?id=46123;
Dolmen sans nom;;1.9;;Gramat;?;;;;;;;
Dolmen du Pech;44°36'00\";1.75;;?;1O;;;;;;;
";

const INVENTORY: &str = "\
INVENTAIRE ALPHABÉTIQUE
BANCAREL, Igue de - Commune de Gramat
577,83 - 246,12 - 340m (IGN 2237 O)
Puits de 20 m. Plan 3.
CAZELLE, Grotte de la - Commune de Rocamadour
600,00 - 200,00 - 250m (IGN 2137 E)
Grande salle.
";

const WIKI_PAGE: &str = "\
{{Début de carte}}
{{G|Lot|44.61|1.72|Dolmen du Pech|dolmen sans toponyme}}
{{G|Lot|44.70|1.80|Dolmen de Roques|sans toponyme}}
{{Fin de carte}}
{| class=\"wikitable\"
|-
| [[Dolmen de la Borie]] || [[Cajarc]] || Bois || || {{coord|44.48|1.84}}
|}
";

#[test]
fn test_dolmen_table_to_kml() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("dolmens.csv");
    std::fs::write(&input, DOLMEN_TABLE).unwrap();

    let config = Config::default().with_title("Dolmens du Lot");
    let table = CsvTableReader::new(&config.input).read_file(&input).unwrap();
    assert_eq!(table.len(), 3);

    let result = PointPipeline::new(ColumnSchema::dolmen(), config.clone())
        .run(&table)
        .unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].row_number, 2);
    assert_eq!(result.diagnostics[0].field.as_deref(), Some("Lat"));
    assert_eq!(result.diagnostics[0].to_string(), "Ligne 2 : champ Lat vide");

    let martine = &result.records[0];
    assert_eq!(martine.commune, "Livernon");
    assert!(martine.description.starts_with("<h1>Informations</h1>\n"));
    assert!(martine.description.contains("<li>* Dalle de couverture présente</li>"));
    assert!(martine.description.contains("<li>* Orthostats présents</li>"));
    assert!(martine.description.contains("<li>* Tumulus présent</li>"));
    assert!(martine.description.contains("https://fr.wikipedia.org/wiki/Livernon"));

    let pech = &result.records[1];
    assert_eq!(pech.commune, "");
    assert!((pech.latitude - 44.6).abs() < 1e-9);
    assert!(pech.description.contains("<li>* Un seul orthostat</li>"));

    let output = temp_dir.path().join("dolmens.kml");
    let writer = KmlWriter::new(config.kml.clone());
    let name = writer.document_name("dolmens", NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    writer.write_file(&output, &name, &result.records).unwrap();

    let kml = std::fs::read_to_string(&output).unwrap();
    assert!(kml.contains("<name>Dolmens du Lot 09/03/24</name>"));
    assert_eq!(kml.matches("<Placemark>").count(), 2);
    assert!(kml.contains("<coordinates>1.847,44.633</coordinates>"));
}

#[test]
fn test_inventory_text_to_records() {
    let extraction = InventoryExtractor::new().extract(INVENTORY);
    assert!(extraction.diagnostics.is_empty());

    let result = PointPipeline::new(ColumnSchema::generic(), Config::default())
        .run(&extraction.into_table())
        .unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].name, "Igue de BANCAREL");
    assert!((result.records[0].latitude - 44.514749).abs() < 1e-5);
    assert!((result.records[0].longitude - 2.057701).abs() < 1e-5);
    assert_eq!(result.records[0].commune, "Gramat");
    assert!(result.records[0].description.contains("<b>Plan</b> : 3<br/>"));
    assert!((result.records[1].latitude - 44.099991).abs() < 1e-5);
}

#[test]
fn test_wiki_extraction_round_trip_through_csv() {
    let temp_dir = TempDir::new().unwrap();
    let page = temp_dir.path().join("page.txt");
    std::fs::write(&page, WIKI_PAGE).unwrap();
    let text = read_text_file(&page).unwrap();

    let map = WikiMapExtractor::new("Lot").unwrap().extract(&text);
    assert_eq!(map.rows.len(), 2);

    let list = WikiListExtractor::new().extract(&text);
    assert_eq!(list.rows.len(), 1);

    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let csv_path = RecordDialect::Wiki.default_output_path(&page, "carte", date);
    assert!(csv_path.ends_with("wikipedia_fr_carte_2024_03_09.csv"));
    write_extraction_file(&csv_path, &map, RecordDialect::Wiki).unwrap();

    let table = CsvTableReader::default().read_file(&csv_path).unwrap();
    let result = PointPipeline::new(ColumnSchema::generic(), Config::default())
        .run(&table)
        .unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[1].name, "Dolmen de Roques");
    assert!((result.records[1].latitude - 44.7).abs() < 1e-9);
    assert_eq!(result.records[1].commune, "");
}

#[test]
fn test_missing_mandatory_column_aborts() {
    let table = CsvTableReader::default()
        .read_str("Nom;Latitude;Commune\nA;44.5;Gramat\n", "inline")
        .unwrap();

    let error = PointPipeline::new(ColumnSchema::generic(), Config::default())
        .run(&table)
        .unwrap_err();

    assert!(error.is_schema_error());
    assert!(matches!(error, Error::Schema(_)));
}

#[test]
fn test_same_input_same_output() {
    let table = CsvTableReader::default()
        .read_str(DOLMEN_TABLE, "inline")
        .unwrap();
    let pipeline = PointPipeline::new(ColumnSchema::dolmen(), Config::default());

    let first = pipeline.run(&table).unwrap();
    let second = pipeline.run(&table).unwrap();

    assert_eq!(first.records, second.records);
    assert_eq!(first.diagnostics, second.diagnostics);
}
