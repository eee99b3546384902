//! Tests for conversion statistics

use super::super::stats::ConversionStats;

#[test]
fn test_conversion_stats_calculation() {
    let stats = ConversionStats {
        total_rows: 100,
        records_accepted: 95,
        rows_skipped: 5,
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());

    let poor_stats = ConversionStats {
        total_rows: 100,
        records_accepted: 80,
        rows_skipped: 20,
    };

    assert_eq!(poor_stats.success_rate(), 80.0);
    assert!(!poor_stats.is_successful());
}

#[test]
fn test_conversion_stats_empty() {
    let empty_stats = ConversionStats::new();

    assert_eq!(empty_stats.total_rows, 0);
    assert_eq!(empty_stats.records_accepted, 0);
    assert_eq!(empty_stats.rows_skipped, 0);
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_successful());
}

#[test]
fn test_conversion_stats_counting() {
    let mut stats = ConversionStats::default();
    stats.record_accepted();
    stats.record_accepted();
    stats.record_skipped();

    assert_eq!(stats.total_rows, 3);
    assert_eq!(stats.records_accepted, 2);
    assert_eq!(stats.rows_skipped, 1);
}
