//! Coordinate normalization to WGS84 decimal degrees
//!
//! Sources give positions either as angle text (plain decimal degrees or
//! sexagesimal `D°MM'SS"`) or as Lambert III planar coordinates in meters.
//! Both end up as decimal WGS84 degrees.
//!
//! ## Architecture
//!
//! - [`angle`] - Angle text parsing
//! - [`lambert`] - Lambert III Sud (NTF) to WGS84 conversion
//!
//! ## Usage
//!
//! ```rust
//! use table2kml::app::services::coordinates::{lambert3_to_wgs84, parse_angle};
//!
//! assert_eq!(parse_angle("44.5").unwrap(), 44.5);
//! assert!((parse_angle("44°30'00\"").unwrap() - 44.5).abs() < 1e-9);
//!
//! let (longitude, latitude) = lambert3_to_wgs84(564_500.0, 3_263_475.0);
//! assert!((longitude - 1.888847).abs() < 1e-5);
//! assert!((latitude - 44.670407).abs() < 1e-5);
//! ```

pub mod angle;
pub mod lambert;

#[cfg(test)]
mod tests;

pub use angle::{AngleFormatError, parse_angle};
pub use lambert::lambert3_to_wgs84;

/// Round a converted coordinate to the published precision
pub fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(crate::constants::COORDINATE_PRECISION);
    (value * factor).round() / factor
}
