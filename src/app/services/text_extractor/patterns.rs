//! Line and field recognizers
//!
//! Every regular expression used by the extractors lives here, behind a
//! `try_parse_*` function returning a typed value. State machines only ever
//! see `Option`s.

use crate::app::services::coordinates::round_coordinate;
use crate::constants::inventory::{
    CROSS_REFERENCE_MARKER, LAMBERT3_Y_OFFSET_KM, NAME_SEPARATOR, OCR_NUMBER_ARTIFACT, TITLE,
};
use crate::constants::wiki::NO_TOPONYM_MARKER;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// Wiki Map Section
// =============================================================================

/// One `{{G|region|lat|lon|name|...}}` map line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLine {
    pub latitude: String,
    pub longitude: String,
    /// Name with template braces and pipes removed
    pub name: String,
}

/// Map template recognizer for one region
#[derive(Debug, Clone)]
pub struct MapLinePattern {
    regex: Regex,
}

impl MapLinePattern {
    pub fn new(region: &str) -> Result<Self> {
        let pattern = format!(
            r"^ *\{{\{{G\|{}\| *(?P<lat>-?\d+(?:\.\d+)?) *\| *(?P<lon>-?\d+(?:\.\d+)?) *\|(?P<name>.*)\|.*{}\}}\}}",
            regex::escape(region),
            regex::escape(NO_TOPONYM_MARKER)
        );
        let regex = Regex::new(&pattern).map_err(|e| {
            Error::configuration(format!("Invalid map region '{}': {}", region, e))
        })?;
        Ok(Self { regex })
    }

    pub fn try_parse_map_line(&self, line: &str) -> Option<MapLine> {
        let captures = self.regex.captures(line)?;
        let name: String = captures["name"]
            .chars()
            .filter(|c| !matches!(c, '{' | '}' | '|'))
            .collect();

        Some(MapLine {
            latitude: captures["lat"].to_string(),
            longitude: captures["lon"].to_string(),
            name: name.trim().to_string(),
        })
    }
}

// =============================================================================
// Wiki Markup
// =============================================================================

pub(crate) static REF_SELF_CLOSING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<ref[^>]*/>").unwrap());

pub(crate) static REF_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<ref[^>]*>(?P<content>.*?)</ref\s*>").unwrap());

pub(crate) static WIKI_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[(?P<target>[^\]|]+)(?:\|(?P<text>[^\]]*))?\]\]").unwrap()
});

pub(crate) static EXTERNAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?:https?:)?//\S+\s+(?P<text>[^\]]+)\]").unwrap());

pub(crate) static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"'{2,}").unwrap());

pub(crate) static LINE_BREAK_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

pub(crate) static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").unwrap());

// =============================================================================
// Wiki List Coordinates
// =============================================================================

static LABELLED_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<label>[^:{}\[\]]+?)\s*:\s*(?P<rest>.+)$").unwrap()
});

static COORD_TEMPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{\{\s*coord\s*\|(?P<params>[^}]*)\}\}").unwrap());

static DECIMAL_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lat>-?\d+\.\d+)\s*[,;/\s]\s*(?P<lon>-?\d+\.\d+)$").unwrap()
});

static SEXAGESIMAL_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(?P<lat_d>\d{1,2})°\s*(?P<lat_m>\d{1,2})['′]\s*"#,
        r#"(?:(?P<lat_s>\d{1,2}(?:[.,]\d+)?)\s*(?:"|″|'')?)?\s*(?P<lat_h>[NS])[\s,;]*"#,
        r#"(?P<lon_d>\d{1,3})°\s*(?P<lon_m>\d{1,2})['′]\s*"#,
        r#"(?:(?P<lon_s>\d{1,2}(?:[.,]\d+)?)\s*(?:"|″|'')?)?\s*(?P<lon_h>[EOW])$"#,
    ))
    .unwrap()
});

/// Decimal WGS84 position, rounded to 6 decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round_coordinate(latitude),
            longitude: round_coordinate(longitude),
        }
    }
}

/// Split `label : coordinates`
pub fn try_parse_labelled_entry(text: &str) -> Option<(String, String)> {
    let captures = LABELLED_ENTRY.captures(text.trim())?;
    Some((
        captures["label"].trim().to_string(),
        captures["rest"].trim().to_string(),
    ))
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}

fn hemisphere_sign(text: &str) -> Option<f64> {
    match text.trim() {
        "N" | "E" => Some(1.0),
        "S" | "O" | "W" => Some(-1.0),
        _ => None,
    }
}

fn sexagesimal(degrees: &str, minutes: &str, seconds: Option<&str>) -> Option<f64> {
    let seconds = match seconds {
        Some(seconds) => parse_number(seconds)?,
        None => 0.0,
    };
    Some(parse_number(degrees)? + parse_number(minutes)? / 60.0 + seconds / 3600.0)
}

/// `{{coord|...}}` in its decimal, hemisphere, degree-minute or
/// degree-minute-second forms; named parameters are ignored
pub fn try_parse_coord_template(text: &str) -> Option<LatLon> {
    let captures = COORD_TEMPLATE.captures(text)?;
    let params: Vec<&str> = captures["params"]
        .split('|')
        .map(str::trim)
        .filter(|param| !param.is_empty() && !param.contains('='))
        .collect();

    let sign_at = |index: usize| params.get(index).and_then(|p| hemisphere_sign(p));

    if let (Some(lat_sign), Some(lon_sign)) = (sign_at(3), sign_at(7)) {
        let latitude = sexagesimal(params[0], params[1], Some(params[2]))?;
        let longitude = sexagesimal(params[4], params[5], Some(params[6]))?;
        return Some(LatLon::new(latitude * lat_sign, longitude * lon_sign));
    }

    if let (Some(lat_sign), Some(lon_sign)) = (sign_at(2), sign_at(5)) {
        let latitude = sexagesimal(params[0], params[1], None)?;
        let longitude = sexagesimal(params[3], params[4], None)?;
        return Some(LatLon::new(latitude * lat_sign, longitude * lon_sign));
    }

    if let (Some(lat_sign), Some(lon_sign)) = (sign_at(1), sign_at(3)) {
        let latitude = parse_number(params[0])?;
        let longitude = parse_number(params[2])?;
        return Some(LatLon::new(latitude * lat_sign, longitude * lon_sign));
    }

    match params.as_slice() {
        [latitude, longitude, ..] => Some(LatLon::new(
            parse_number(latitude)?,
            parse_number(longitude)?,
        )),
        _ => None,
    }
}

/// `44.5, 1.5` style pair
pub fn try_parse_decimal_pair(text: &str) -> Option<LatLon> {
    let captures = DECIMAL_PAIR.captures(text.trim())?;
    Some(LatLon::new(
        parse_number(&captures["lat"])?,
        parse_number(&captures["lon"])?,
    ))
}

/// `44°30'15" N, 1°45'00" E` style pair; `S` and `O`/`W` negate
pub fn try_parse_sexagesimal_pair(text: &str) -> Option<LatLon> {
    let captures = SEXAGESIMAL_PAIR.captures(text.trim())?;
    let latitude = sexagesimal(
        &captures["lat_d"],
        &captures["lat_m"],
        captures.name("lat_s").map(|m| m.as_str()),
    )?;
    let longitude = sexagesimal(
        &captures["lon_d"],
        &captures["lon_m"],
        captures.name("lon_s").map(|m| m.as_str()),
    )?;

    Some(LatLon::new(
        latitude * hemisphere_sign(&captures["lat_h"])?,
        longitude * hemisphere_sign(&captures["lon_h"])?,
    ))
}

/// Any supported coordinate notation
pub fn try_parse_coordinates(text: &str) -> Option<LatLon> {
    try_parse_coord_template(text)
        .or_else(|| try_parse_decimal_pair(text))
        .or_else(|| try_parse_sexagesimal_pair(text))
}

// =============================================================================
// Inventory Text
// =============================================================================

static INVENTORY_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?P<title>{})$", regex::escape(TITLE))).unwrap());

static PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<page>\d+)$").unwrap());

static ENTRY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[A-Z0-9 °ÏÑÉÂÈÇËÊÜÔÛŒô?()'’-]+?), (?P<qualifier>.+)Commune d.(?P<commune>.*)",
    )
    .unwrap()
});

static FULL_COORDINATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<xe>\d{3}),(?P<xd>\d{2}) - (?P<ye>\d{3}),(?P<yd>\d{2}) - (?P<alt>\d{1,4})m",
        r"[( )]*IGN (?P<ign>\d{4} [ETOW]{1,2})\)$",
    ))
    .unwrap()
});

static SUB_COORDINATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<sub>.*?)[: ]?(?P<xe>\d{3}),(?P<xd>\d{2}) - (?P<ye>\d{3}),(?P<yd>\d{2})",
        r" - (?P<alt>\d{1,4})m[ )]?$",
    ))
    .unwrap()
});

static SUB_COORDINATES_IGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<sub>.*?)[: ]?(?P<xe>\d{3}),(?P<xd>\d{2}) - (?P<ye>\d{3}),(?P<yd>\d{2})",
        r" - (?P<alt>\d{1,4})m \) \(IGN (?P<ign>\d{4} [ETOW]{1,2})\)$",
    ))
    .unwrap()
});

static IGN_SHEET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[) (]?IGN (?P<ign>\d{4} [ETOW]{1,2})\)$").unwrap());

static PLAN_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Plan (?P<plan>\d{1,3}).").unwrap());

/// `NAME, qualifier - [alias - ]Commune d'X`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    /// Upper-case cave name
    pub name: String,
    /// Qualifier written before the name ("Grotte de la")
    pub qualifier: String,
    pub alias: String,
    pub commune: String,
}

/// One Lambert III position line of the inventory
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateLine {
    /// Sub-entry label, empty for the main entrance
    pub sub_name: String,
    /// Lambert III easting, meters
    pub x: f64,
    /// Lambert III "carto" northing, meters
    pub y: f64,
    pub altitude: String,
    pub ign_sheet: Option<String>,
}

pub fn try_parse_title(line: &str) -> Option<String> {
    INVENTORY_TITLE
        .captures(line)
        .map(|captures| captures["title"].to_string())
}

pub fn is_cross_reference(line: &str) -> bool {
    line.contains(CROSS_REFERENCE_MARKER)
}

pub fn try_parse_page(line: &str) -> Option<u32> {
    PAGE_NUMBER.captures(line)?["page"].parse().ok()
}

pub fn try_parse_entry(line: &str) -> Option<EntryLine> {
    let captures = ENTRY_LINE.captures(line)?;

    let mut qualifier = captures["qualifier"]
        .trim_end()
        .trim_end_matches('-')
        .trim_end()
        .to_string();
    if qualifier.contains(OCR_NUMBER_ARTIFACT) {
        qualifier = qualifier
            .replace(OCR_NUMBER_ARTIFACT, "n°")
            .replace(')', "");
    }

    let (qualifier, alias) = match qualifier.split_once(NAME_SEPARATOR) {
        Some((qualifier, alias)) => (qualifier.to_string(), alias.trim().to_string()),
        None => (qualifier, String::new()),
    };

    Some(EntryLine {
        name: captures["name"].trim().to_string(),
        qualifier: qualifier.trim().to_string(),
        alias,
        commune: captures["commune"].trim().to_string(),
    })
}

fn coordinate_line(
    captures: &regex::Captures<'_>,
    ign_sheet: Option<String>,
) -> Option<CoordinateLine> {
    let part = |name: &str| captures[name].parse::<f64>().ok();
    let x = part("xe")? * 1000.0 + part("xd")? * 10.0;
    let y = (LAMBERT3_Y_OFFSET_KM + part("ye")?) * 1000.0 + part("yd")? * 10.0;

    let sub_name = captures
        .name("sub")
        .map(|m| m.as_str().trim().trim_end_matches(':').trim().to_string())
        .unwrap_or_default();

    Some(CoordinateLine {
        sub_name,
        x,
        y,
        altitude: captures["alt"].to_string(),
        ign_sheet,
    })
}

/// `XXX,XX - YYY,YY - AAAm (IGN NNNN E)`
pub fn try_parse_full_coordinates(line: &str) -> Option<CoordinateLine> {
    let captures = FULL_COORDINATES.captures(line)?;
    let ign_sheet = captures["ign"].to_string();
    coordinate_line(&captures, Some(ign_sheet))
}

/// `label : XXX,XX - YYY,YY - AAAm`, optionally followed by `) (IGN NNNN E)`
pub fn try_parse_sub_coordinates(line: &str) -> Option<CoordinateLine> {
    if let Some(captures) = SUB_COORDINATES.captures(line) {
        return coordinate_line(&captures, None);
    }
    let captures = SUB_COORDINATES_IGN.captures(line)?;
    let ign_sheet = captures["ign"].to_string();
    coordinate_line(&captures, Some(ign_sheet))
}

/// Isolated `(IGN NNNN E)` line
pub fn try_parse_ign_sheet(line: &str) -> Option<String> {
    IGN_SHEET
        .captures(line)
        .map(|captures| captures["ign"].to_string())
}

/// `Plan N.` anywhere in a description line
pub fn try_parse_plan(line: &str) -> Option<String> {
    PLAN_NUMBER
        .captures(line)
        .map(|captures| captures["plan"].to_string())
}
