//! Tests for angle text parsing

use super::super::angle::{AngleFormatError, parse_angle};
use super::assert_close;

#[test]
fn test_parse_decimal() {
    assert_eq!(parse_angle("44.5").unwrap(), 44.5);
    assert_eq!(parse_angle("-1.25").unwrap(), -1.25);
    assert_eq!(parse_angle("  2.0351 ").unwrap(), 2.0351);
    assert_eq!(parse_angle("45").unwrap(), 45.0);
}

#[test]
fn test_decimal_matches_direct_parse() {
    for text in ["0", "1.5", "-179.999999", "44.670407", "1e1"] {
        assert_eq!(parse_angle(text).unwrap(), text.parse::<f64>().unwrap());
    }
}

#[test]
fn test_parse_sexagesimal() {
    assert_close(parse_angle("44°30'00\"").unwrap(), 44.5, 1e-9);
    assert_close(
        parse_angle("44°51'37\"").unwrap(),
        44.0 + 51.0 / 60.0 + 37.0 / 3600.0,
        1e-9,
    );
    assert_close(
        parse_angle("1°51'37\"").unwrap(),
        1.0 + 51.0 / 60.0 + 37.0 / 3600.0,
        1e-9,
    );
}

#[test]
fn test_sexagesimal_grid() {
    for degrees in [0u32, 1, 9, 44, 99] {
        for minutes in [0u32, 7, 30, 59, 99] {
            for seconds in [0u32, 15, 59, 99] {
                let text = format!("{}°{:02}'{:02}\"", degrees, minutes, seconds);
                let expected =
                    degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0;
                assert_close(parse_angle(&text).unwrap(), expected, 1e-9);
            }
        }
    }
}

#[test]
fn test_sexagesimal_trailing_text_tolerated() {
    let expected = 1.0 + 51.0 / 60.0 + 37.0 / 3600.0;
    assert_close(parse_angle("1°51'37\"\"").unwrap(), expected, 1e-9);
    assert_close(parse_angle("1°51'37\" ").unwrap(), expected, 1e-9);
    assert_close(parse_angle("1°51'37\" N").unwrap(), expected, 1e-9);
}

#[test]
fn test_sexagesimal_leading_text_tolerated() {
    assert_close(parse_angle("N44°30'00\"").unwrap(), 44.5, 1e-9);
    assert_close(parse_angle("≈44°30'00\"").unwrap(), 44.5, 1e-9);
    assert_close(
        parse_angle("N 44°51'37\"").unwrap(),
        44.0 + 51.0 / 60.0 + 37.0 / 3600.0,
        1e-9,
    );
}

#[test]
fn test_minute_magnitude_not_checked() {
    assert_close(parse_angle("1°75'00\"").unwrap(), 2.25, 1e-9);
}

#[test]
fn test_invalid_angles() {
    for text in ["44:51:37", "", "abc", "   ", "44°5'37\"", "N44°30'"] {
        assert_eq!(
            parse_angle(text),
            Err(AngleFormatError {
                text: text.to_string()
            }),
            "'{}' should be rejected",
            text
        );
    }
}

#[test]
fn test_non_finite_rejected() {
    assert!(parse_angle("inf").is_err());
    assert!(parse_angle("NaN").is_err());
    assert!(parse_angle("-infinity").is_err());
}

#[test]
fn test_error_carries_text() {
    let error = parse_angle("44,5").unwrap_err();
    assert_eq!(error.text, "44,5");
    assert!(error.to_string().contains("44,5"));
}
