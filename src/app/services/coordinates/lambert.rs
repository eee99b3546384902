//! Lambert III Sud to WGS84 conversion
//!
//! Three steps, all on fixed parameters from [`crate::constants::lambert3`]:
//! 1. Inverse Lambert conformal conic (tangent at 44.1°) on the Clarke 1880
//!    IGN ellipsoid, giving NTF geographic coordinates (Paris meridian).
//! 2. NTF geographic to geocentric, shifted by the 3-parameter NTF to WGS84
//!    translation.
//! 3. Geocentric to WGS84 geographic.

use super::round_coordinate;
use crate::constants::lambert3::{
    CENTRAL_MERIDIAN_DEG, CLARKE_A, CLARKE_RF, EPSILON, FALSE_EASTING, FALSE_NORTHING,
    LATITUDE_ORIGIN_DEG, MAX_ITERATIONS, PRIME_MERIDIAN_DEG, SCALE_FACTOR, TO_WGS84, WGS84_A,
    WGS84_RF,
};
use std::f64::consts::FRAC_PI_4;

/// Ellipsoid defined by semi-major axis and first eccentricity squared
#[derive(Debug, Clone, Copy)]
struct Ellipsoid {
    a: f64,
    e2: f64,
}

impl Ellipsoid {
    fn from_inverse_flattening(a: f64, rf: f64) -> Self {
        let f = 1.0 / rf;
        Self { a, e2: 2.0 * f - f * f }
    }

    fn e(&self) -> f64 {
        self.e2.sqrt()
    }

    /// Prime vertical radius of curvature
    fn normal_radius(&self, latitude: f64) -> f64 {
        self.a / (1.0 - self.e2 * latitude.sin().powi(2)).sqrt()
    }

    /// Isometric latitude
    fn isometric_latitude(&self, latitude: f64) -> f64 {
        let e = self.e();
        let es = e * latitude.sin();
        ((FRAC_PI_4 + latitude / 2.0).tan() * ((1.0 - es) / (1.0 + es)).powf(e / 2.0)).ln()
    }

    /// Latitude from isometric latitude, by fixed-point iteration
    fn latitude_from_isometric(&self, isometric: f64) -> f64 {
        let e = self.e();
        let exp_l = isometric.exp();
        let mut latitude = 2.0 * exp_l.atan() - 2.0 * FRAC_PI_4;

        for _ in 0..MAX_ITERATIONS {
            let es = e * latitude.sin();
            let next = 2.0 * (((1.0 + es) / (1.0 - es)).powf(e / 2.0) * exp_l).atan() - 2.0 * FRAC_PI_4;
            let converged = (next - latitude).abs() < EPSILON;
            latitude = next;
            if converged {
                break;
            }
        }

        latitude
    }

    /// Geographic (radians, height 0) to geocentric cartesian
    fn geographic_to_cartesian(&self, longitude: f64, latitude: f64) -> [f64; 3] {
        let n = self.normal_radius(latitude);
        [
            n * latitude.cos() * longitude.cos(),
            n * latitude.cos() * longitude.sin(),
            n * (1.0 - self.e2) * latitude.sin(),
        ]
    }

    /// Geocentric cartesian to geographic (radians), height discarded
    fn cartesian_to_geographic(&self, [x, y, z]: [f64; 3]) -> (f64, f64) {
        let longitude = y.atan2(x);
        let p = x.hypot(y);
        let radius = (x * x + y * y + z * z).sqrt();
        let mut latitude = (z / (p * (1.0 - self.a * self.e2 / radius))).atan();

        for _ in 0..MAX_ITERATIONS {
            let next = (z / p
                / (1.0
                    - self.a * self.e2 * latitude.cos()
                        / (p * (1.0 - self.e2 * latitude.sin().powi(2)).sqrt())))
            .atan();
            let converged = (next - latitude).abs() < EPSILON;
            latitude = next;
            if converged {
                break;
            }
        }

        (longitude, latitude)
    }
}

/// Convert Lambert III Sud "carto" meters to WGS84 `(longitude, latitude)`
/// decimal degrees, rounded to 6 decimals
pub fn lambert3_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let clarke = Ellipsoid::from_inverse_flattening(CLARKE_A, CLARKE_RF);
    let wgs84 = Ellipsoid::from_inverse_flattening(WGS84_A, WGS84_RF);

    // Cone constants for a tangent projection
    let origin = LATITUDE_ORIGIN_DEG.to_radians();
    let n = origin.sin();
    let r0 = SCALE_FACTOR * clarke.normal_radius(origin) / origin.tan();
    let c = r0 * (n * clarke.isometric_latitude(origin)).exp();
    let y_pole = FALSE_NORTHING + r0;

    let dx = x - FALSE_EASTING;
    let dy = y_pole - y;
    let radius = dx.hypot(dy);
    let gamma = dx.atan2(dy);

    let ntf_longitude =
        CENTRAL_MERIDIAN_DEG.to_radians() + gamma / n + PRIME_MERIDIAN_DEG.to_radians();
    let ntf_latitude = clarke.latitude_from_isometric(-(radius / c).ln() / n);

    let [cx, cy, cz] = clarke.geographic_to_cartesian(ntf_longitude, ntf_latitude);
    let shifted = [cx + TO_WGS84[0], cy + TO_WGS84[1], cz + TO_WGS84[2]];
    let (longitude, latitude) = wgs84.cartesian_to_geographic(shifted);

    (
        round_coordinate(longitude.to_degrees()),
        round_coordinate(latitude.to_degrees()),
    )
}
