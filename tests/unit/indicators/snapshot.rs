//! Unit tests for snapshot assembly

use levara::config::IndicatorConfig;
use levara::indicators::{compute_snapshot, IndicatorError};

fn uptrend_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64 * 0.5).collect()
}

#[test]
fn test_snapshot_fields_consistent() {
    let closes = uptrend_closes(30);
    let config = IndicatorConfig::default();
    let snapshot = compute_snapshot(&closes, &config).unwrap();

    let expected_sma: f64 = closes[10..].iter().sum::<f64>() / 20.0;
    assert!((snapshot.sma - expected_sma).abs() < 1e-9);
    assert_eq!(snapshot.sma_window, 20);
    assert_eq!(snapshot.rsi_period, 14);

    // Min/max of the last 24 closes of a rising series
    assert!((snapshot.support - closes[30 - 24]).abs() < 1e-12);
    assert!((snapshot.resistance - closes[29]).abs() < 1e-12);

    assert!((0.0..=100.0).contains(&snapshot.rsi));
    assert_eq!(snapshot.closes, closes);
    assert_eq!(snapshot.last_close(), Some(closes[29]));
}

#[test]
fn test_snapshot_too_short_for_structure_window() {
    // 23 closes satisfy SMA(20) and RSI(14) but not the 24-close lookback
    let closes = uptrend_closes(23);
    let err = compute_snapshot(&closes, &IndicatorConfig::default()).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InsufficientData {
            indicator: "support_resistance",
            required: 24,
            actual: 23,
        }
    );
}

#[test]
fn test_snapshot_too_short_for_any_indicator() {
    let closes = uptrend_closes(5);
    assert!(matches!(
        compute_snapshot(&closes, &IndicatorConfig::default()),
        Err(IndicatorError::InsufficientData { .. })
    ));
}

#[test]
fn test_snapshot_rejects_non_positive_close() {
    let mut closes = uptrend_closes(30);
    closes[7] = 0.0;
    let err = compute_snapshot(&closes, &IndicatorConfig::default()).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InvalidPrice {
            index: 7,
            value: 0.0,
        }
    );
}

#[test]
fn test_snapshot_rejects_nan_close() {
    let mut closes = uptrend_closes(30);
    closes[12] = f64::NAN;
    assert!(matches!(
        compute_snapshot(&closes, &IndicatorConfig::default()),
        Err(IndicatorError::InvalidPrice { index: 12, .. })
    ));
}
