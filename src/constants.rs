//! Application constants for table2kml
//!
//! This module contains the fixed field labels, markup markers, projection
//! parameters and default values used throughout the converter.

// =============================================================================
// Logical Column Names
// =============================================================================

/// Logical column names matched by prefix against physical headers
pub mod columns {
    pub const NAME: &str = "Nom";
    pub const LATITUDE: &str = "Lat";
    pub const LONGITUDE: &str = "Lon";
    pub const COMMUNE: &str = "Commune";
    pub const PLACE: &str = "Lieu";
    pub const STATUS: &str = "Etat";
    pub const TUMULUS: &str = "Tumulus";
    pub const ORTHOSTATS: &str = "Orthostats";
    pub const TABLE: &str = "Table";
    pub const PROTECTION: &str = "Classement";
    pub const DETAILS: &str = "Détails";
    pub const URL: &str = "URL";
    pub const OSM: &str = "OSM";

    /// Headers starting with this prefix are ignored
    pub const IGNORED_PREFIX: &str = "-";
}

// =============================================================================
// Description Rendering
// =============================================================================

/// Heading written at the top of every placemark description
pub const DESCRIPTION_HEADING: &str = "Informations";

/// Cell value meaning "unknown", never rendered
pub const PLACEHOLDER_VALUE: &str = "?";

/// Line break marker closing every rendered description line
pub const LINE_BREAK: &str = "<br/>\n";

/// Encyclopedia page prefix used to link commune names
pub const ENCYCLOPEDIA_BASE_URL: &str = "https://fr.wikipedia.org/wiki/";

/// Anchor text for web links that cannot be shortened to "id (site)"
pub const WEB_LINK_LABEL: &str = "Infos WEB";

// =============================================================================
// Diagnostic Messages
// =============================================================================

/// Fixed French diagnostic texts, as used by the source data maintainers
pub mod messages {
    pub const EMPTY_FIELD: &str = "vide";
    pub const INVALID_FIELD: &str = "incorrect";
    pub const OUT_OF_RANGE_FIELD: &str = "hors limites";
    pub const MAP_LINE_SKIPPED: &str = "Ligne ignorée dans section carte";
    pub const LIST_ROW_SKIPPED: &str = "Ligne de tableau ignorée";
    pub const LIST_ROW_TOO_SHORT: &str = "colonnes manquantes";
    pub const LIST_ROW_WITHOUT_NAME: &str = "nom vide";
    pub const LIST_ROW_WITHOUT_COORDINATES: &str = "pas de coordonnées";
    pub const COORDINATES_UNREADABLE: &str = "coordonnées illisibles";
    pub const TITLE_MISPLACED: &str = "titre sur mauvaise ligne";
    pub const COORDINATE_MISPLACED: &str = "coordonnée sur mauvaise ligne";
    pub const SUB_COORDINATE_MISPLACED: &str = "coordonnée sous grotte sur mauvaise ligne";
    pub const ENTRY_WITHOUT_DESCRIPTION: &str = "entrée sans description ignorée";
    pub const ENTRY_WITHOUT_COORDINATES: &str = "entrée sans coordonnées ignorée";
}

// =============================================================================
// Wiki Markup Markers
// =============================================================================

/// Markers delimiting the map section and article list of a wiki page
pub mod wiki {
    pub const MAP_START_MARKER: &str = "{{Début de carte}}";
    pub const MAP_END_MARKER: &str = "{{Fin de carte}}";
    pub const LIST_START_MARKER: &str = "{|";
    pub const LIST_END_MARKER: &str = "|}";
    pub const ROW_START_MARKER: &str = "|-";
    pub const HEADER_CELL_MARKER: &str = "!";
    pub const CELL_SEPARATOR: &str = "||";

    /// Region constant of the `{{G|...}}` map template
    pub const DEFAULT_REGION: &str = "Lot";

    /// Trailing qualifier a map template line must carry
    pub const NO_TOPONYM_MARKER: &str = "sans toponyme";

    /// Commune value written when the map section gives none
    pub const UNKNOWN_COMMUNE: &str = "?";
}

// =============================================================================
// Inventory Text
// =============================================================================

/// Inventory (cave book) layout constants
pub mod inventory {
    pub const TITLE: &str = "INVENTAIRE ALPHABÉTIQUE";
    pub const CROSS_REFERENCE_MARKER: &str = "- voir à";
    pub const NAME_SEPARATOR: &str = " - ";
    pub const SUB_ENTRY_SEPARATOR: &str = " : ";

    /// OCR renders "n°" as "(nE" in entry qualifiers
    pub const OCR_NUMBER_ARTIFACT: &str = "(nE";

    /// Lambert III Y values are printed without their leading 3000 km
    pub const LAMBERT3_Y_OFFSET_KM: f64 = 3000.0;
}

// =============================================================================
// Output Column Sets
// =============================================================================

/// Columns of the wiki map section extraction
pub const WIKI_MAP_COLUMNS: &[&str] = &["Nom", "Lat", "Lon", "Commune"];

/// Columns of the wiki article list extraction
pub const WIKI_LIST_COLUMNS: &[&str] = &[
    "Nom",
    "Lat",
    "Lon",
    "Commune",
    "Lieu",
    "Protection",
    "Remarques",
];

/// Columns of the inventory extraction
pub const INVENTORY_COLUMNS: &[&str] = &[
    "Nom cavité",
    "Alias",
    "Commune",
    "IGN",
    "X Lambert3",
    "Y Lambert3",
    "Latitude",
    "Longitude",
    "Altitude",
    "Description",
    "Page Taisne",
    "Plan",
];

// =============================================================================
// Coordinate Conversion
// =============================================================================

/// Decimal places kept on converted WGS84 coordinates
pub const COORDINATE_PRECISION: i32 = 6;

/// Lambert III Sud (NTF, Paris meridian) projection and datum parameters
pub mod lambert3 {
    /// Clarke 1880 (IGN) semi-major axis in meters
    pub const CLARKE_A: f64 = 6_378_249.2;
    /// Clarke 1880 (IGN) inverse flattening
    pub const CLARKE_RF: f64 = 293.466_021;
    /// Paris meridian, degrees east of Greenwich
    pub const PRIME_MERIDIAN_DEG: f64 = 2.337_229_167;
    /// Latitude of origin and standard parallel, degrees
    pub const LATITUDE_ORIGIN_DEG: f64 = 44.1;
    /// Central meridian relative to Paris, degrees
    pub const CENTRAL_MERIDIAN_DEG: f64 = 0.0;
    /// Scale factor at the origin
    pub const SCALE_FACTOR: f64 = 0.999_877_50;
    /// False easting in meters
    pub const FALSE_EASTING: f64 = 600_000.0;
    /// False northing in meters ("carto" variant, zone number prefixed)
    pub const FALSE_NORTHING: f64 = 3_200_000.0;
    /// NTF to WGS84 geocentric translation, meters
    pub const TO_WGS84: [f64; 3] = [-168.0, -60.0, 320.0];

    /// WGS84 semi-major axis in meters
    pub const WGS84_A: f64 = 6_378_137.0;
    /// WGS84 inverse flattening
    pub const WGS84_RF: f64 = 298.257_223_563;

    /// Convergence threshold for latitude iterations, radians
    pub const EPSILON: f64 = 1e-12;
    /// Iteration cap for latitude solvers
    pub const MAX_ITERATIONS: usize = 100;
}

// =============================================================================
// KML Output
// =============================================================================

/// KML namespace
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Label colour of every placemark (cadet blue, aabbggrr)
pub const KML_LABEL_COLOR: &str = "ffa09e5f";

/// Identifier of the shared placemark style
pub const KML_STYLE_ID: &str = "poi-style";

/// Date format appended to the layer title
pub const KML_TITLE_DATE_FORMAT: &str = "%d/%m/%y";

/// Default layer title
pub const DEFAULT_LAYER_TITLE: &str = "Calque";

/// Date format used in default wiki extraction file names
pub const EXTRACTION_FILE_DATE_FORMAT: &str = "%Y_%m_%d";

/// Candidate delimiters tried when sniffing a delimited file
pub const CSV_DELIMITER_CANDIDATES: &[u8] = b",;\t|";

/// Delimiter used when sniffing finds nothing (French Excel export)
pub const CSV_FALLBACK_DELIMITER: u8 = b';';

/// Configuration directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "table2kml";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";
