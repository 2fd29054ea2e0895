//! Unit tests for log-return statistics and annualized volatility

use levara::indicators::volatility::{annualized_volatility, log_returns, return_stats};

#[test]
fn test_log_returns_known_values() {
    let closes = vec![100.0, 200.0, 100.0];
    let returns = log_returns(&closes).unwrap();
    assert_eq!(returns.len(), 2);
    assert!((returns[0] - 2.0_f64.ln()).abs() < 1e-12);
    assert!((returns[1] + 2.0_f64.ln()).abs() < 1e-12);
}

#[test]
fn test_log_returns_insufficient_data() {
    assert!(log_returns(&[100.0]).is_err());
    assert!(log_returns(&[]).is_err());
}

#[test]
fn test_return_stats_population_std() {
    // Population std of two points is half their distance
    let (mean, std) = return_stats(&[0.1, 0.3]);
    assert!((mean - 0.2).abs() < 1e-12);
    assert!((std - 0.1).abs() < 1e-12);
}

#[test]
fn test_return_stats_empty() {
    assert_eq!(return_stats(&[]), (0.0, 0.0));
}

#[test]
fn test_volatility_flat_series_is_zero() {
    let closes = vec![42.0; 20];
    let vol = annualized_volatility(&closes).unwrap();
    assert!(vol.abs() < 1e-12);
}

#[test]
fn test_volatility_single_return_is_zero() {
    // One return, population std over one sample
    let closes = vec![100.0, 110.0];
    let vol = annualized_volatility(&closes).unwrap();
    assert!(vol.abs() < 1e-12);
}

#[test]
fn test_volatility_symmetric_swing() {
    // Returns are +/- ln(1.1) with zero mean, so the std is ln(1.1)
    let closes = vec![100.0, 110.0, 100.0];
    let vol = annualized_volatility(&closes).unwrap();
    let expected = 1.1_f64.ln() * 365.0_f64.sqrt();
    assert!((vol - expected).abs() < 1e-12);
}
