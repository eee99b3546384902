//! Tests for coordinate normalization

mod angle_tests;

/// Absolute tolerance used for converted coordinates
pub const COORDINATE_TOLERANCE: f64 = 1e-5;

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}
