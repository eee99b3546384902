//! HTML description rendering
//!
//! Every accepted record carries an HTML blob shown in the map balloon:
//! a fixed heading followed by one `<b>header</b> : value` line per
//! populated column, rendered according to the column's [`FieldKind`].

use crate::app::models::{ColumnBinding, FieldKind, RawRow};
use crate::config::DescriptionConfig;
use crate::constants::{DESCRIPTION_HEADING, LINE_BREAK};
use once_cell::sync::Lazy;
use regex::Regex;

static SITE_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(?P<site>.+?)/.*?(?P<id>[\w=. ]+)$").unwrap());

/// One condition decoded from a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    CapstoneMoved,
    CapstonePresent,
    SingleOrthostat,
    OrthostatsPresent,
    TumulusPresent,
    OrthostatRemains,
    CapstoneRemains,
    Undetermined,
}

impl StatusFlag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CapstoneMoved => "Dalle de couverture présente, mais déplacée",
            Self::CapstonePresent => "Dalle de couverture présente",
            Self::SingleOrthostat => "Un seul orthostat",
            Self::OrthostatsPresent => "Orthostats présents",
            Self::TumulusPresent => "Tumulus présent",
            Self::OrthostatRemains => "Restes d'orthostats",
            Self::CapstoneRemains => "Restes de table",
            Self::Undetermined => "Indéterminé",
        }
    }
}

/// Decode a compact status code such as `C1OT` or `(C)ro`
///
/// Flags are case-sensitive substring tests: `T` is a tumulus, `t` table
/// remains.
pub fn decode_status(code: &str) -> Vec<StatusFlag> {
    let mut flags = Vec::new();

    if code.contains("(C)") {
        flags.push(StatusFlag::CapstoneMoved);
    } else if code.contains('C') {
        flags.push(StatusFlag::CapstonePresent);
    }

    if code.contains("1O") {
        flags.push(StatusFlag::SingleOrthostat);
    } else if code.contains('O') {
        flags.push(StatusFlag::OrthostatsPresent);
    }

    if code.contains('T') {
        flags.push(StatusFlag::TumulusPresent);
    }
    if code.contains("ro") {
        flags.push(StatusFlag::OrthostatRemains);
    }
    if code.contains('t') || code.contains('c') {
        flags.push(StatusFlag::CapstoneRemains);
    }
    if code.contains('?') {
        flags.push(StatusFlag::Undetermined);
    }

    flags
}

/// Shorten a site URL to `id (site)`, if it has the usual shape
pub fn short_url_label(url: &str) -> Option<String> {
    SITE_URL_PATTERN
        .captures(url.trim())
        .map(|captures| format!("{} ({})", &captures["id"], &captures["site"]))
}

fn anchor(href: &str, text: &str) -> String {
    format!("<a href=\"{}\" target=\"_blank\">{}</a>", href, text)
}

/// Anchor for a bare URL found in a text column
pub fn format_url(url: &str) -> String {
    let url = url.trim();
    match short_url_label(url) {
        Some(label) => anchor(url, &label),
        None => anchor(url, url),
    }
}

/// Decimal degrees, always with a fractional part (`44.0`, not `44`)
pub fn format_degrees(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Builds the description of one row
#[derive(Debug, Clone)]
pub struct DescriptionBuilder {
    config: DescriptionConfig,
}

impl DescriptionBuilder {
    pub fn new(config: DescriptionConfig) -> Self {
        Self { config }
    }

    /// Render the description columns of a row
    ///
    /// Coordinate columns show the normalized values rather than the source
    /// text.
    pub fn build(
        &self,
        columns: &[ColumnBinding],
        row: &RawRow,
        latitude: f64,
        longitude: f64,
    ) -> String {
        let mut description = format!("<h1>{}</h1>\n", DESCRIPTION_HEADING);

        for column in columns {
            let value = match column.kind {
                FieldKind::WebLink | FieldKind::Text => row.value(column.column_index),
                _ => row.cell(column.column_index),
            };
            if value.is_empty() || value == self.config.placeholder {
                continue;
            }

            description.push_str(&format!("<b>{}</b> : ", column.physical_header));
            description.push_str(&self.render_value(column.kind, value, latitude, longitude));
        }

        description
    }

    fn render_value(&self, kind: FieldKind, value: &str, latitude: f64, longitude: f64) -> String {
        match kind {
            FieldKind::StatusCode => {
                let mut list = String::from("\n<ul>\n");
                for flag in decode_status(value) {
                    list.push_str(&format!("<li>* {}</li>\n", flag.label()));
                }
                list.push_str("</ul>\n");
                list
            }
            FieldKind::Commune => {
                let href = format!("{}{}", self.config.encyclopedia_base_url, value);
                format!("{}{}", anchor(&href, value), LINE_BREAK)
            }
            FieldKind::WebLink => {
                let label =
                    short_url_label(value).unwrap_or_else(|| self.config.web_link_label.clone());
                format!("{}{}", anchor(value, &label), LINE_BREAK)
            }
            FieldKind::Latitude => format!("{}{}", format_degrees(latitude), LINE_BREAK),
            FieldKind::Longitude => format!("{}{}", format_degrees(longitude), LINE_BREAK),
            FieldKind::Name | FieldKind::Text if value.starts_with("http") => {
                format!("{}{}", format_url(value), LINE_BREAK)
            }
            FieldKind::Name | FieldKind::Text => format!("{}{}", value, LINE_BREAK),
        }
    }
}
