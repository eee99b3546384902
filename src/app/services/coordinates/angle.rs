//! Angle text parsing
//!
//! Accepts plain decimal degrees, then falls back to the sexagesimal form
//! used in the spreadsheets (`44°51'37"`). Spreadsheet exports sometimes
//! double the closing quote or add text around the value (a hemisphere
//! letter, an `≈`), so the sexagesimal form may appear anywhere in the text.

use once_cell::sync::Lazy;
use regex::Regex;

static DMS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?P<degrees>\d{1,2})°(?P<minutes>\d{2})'(?P<seconds>\d{2})""#).unwrap());

/// Angle text that is neither decimal nor sexagesimal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("angle illisible : '{text}'")]
pub struct AngleFormatError {
    /// The offending text, untrimmed
    pub text: String,
}

impl AngleFormatError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Parse an angle into decimal degrees
///
/// Minute and second magnitudes are not checked: `1°75'00"` gives 2.25.
pub fn parse_angle(text: &str) -> Result<f64, AngleFormatError> {
    let trimmed = text.trim();

    if let Ok(value) = trimmed.parse::<f64>() {
        return if value.is_finite() {
            Ok(value)
        } else {
            Err(AngleFormatError::new(text))
        };
    }

    let captures = DMS_PATTERN
        .captures(trimmed)
        .ok_or_else(|| AngleFormatError::new(text))?;

    let component = |name: &str| -> Result<f64, AngleFormatError> {
        captures[name]
            .parse::<f64>()
            .map_err(|_| AngleFormatError::new(text))
    };

    Ok(component("degrees")? + component("minutes")? / 60.0 + component("seconds")? / 3600.0)
}
