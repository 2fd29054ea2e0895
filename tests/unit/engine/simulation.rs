//! Unit tests for the Monte Carlo simulation

use chrono::Utc;
use levara::config::IndicatorConfig;
use levara::engine::{simulation, EngineError, StrategyEngine};
use levara::indicators::{compute_snapshot, IndicatorError};
use levara::models::IndicatorSnapshot;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Symmetric +/-5% swings: zero mean log return, meaningful variance.
fn choppy_snapshot() -> IndicatorSnapshot {
    let closes: Vec<f64> = (0..30)
        .map(|i| if i % 2 == 0 { 100.0 } else { 105.0 })
        .collect();
    compute_snapshot(&closes, &IndicatorConfig::default()).unwrap()
}

#[test]
fn test_constant_history_collapses_to_zero() {
    let closes = vec![100.0; 30];
    let snapshot = compute_snapshot(&closes, &IndicatorConfig::default()).unwrap();

    let result = simulation::run_simulation(100.0, &snapshot, 500).unwrap();
    assert!(result.avg_return.abs() < 1e-12);
    assert_eq!(result.success_rate, 0.0);
    assert_eq!(result.trials, 500);
}

#[test]
fn test_zero_trials_rejected() {
    let snapshot = choppy_snapshot();
    assert!(matches!(
        simulation::run_simulation(100.0, &snapshot, 0),
        Err(EngineError::DegenerateInput(_))
    ));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let snapshot = choppy_snapshot();

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = simulation::run_simulation_with_rng(100.0, &snapshot, 1000, &mut rng_a).unwrap();
    let b = simulation::run_simulation_with_rng(100.0, &snapshot, 1000, &mut rng_b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_agree_statistically() {
    let snapshot = choppy_snapshot();

    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);
    let a = simulation::run_simulation_with_rng(100.0, &snapshot, 1000, &mut rng_a).unwrap();
    let b = simulation::run_simulation_with_rng(100.0, &snapshot, 1000, &mut rng_b).unwrap();

    assert!(a.avg_return.is_finite() && b.avg_return.is_finite());
    assert!((0.0..=1.0).contains(&a.success_rate));
    assert!((0.0..=1.0).contains(&b.success_rate));
    // Similar, not identical: 5pp band at 1000 trials, with headroom
    assert!((a.success_rate - b.success_rate).abs() < 0.08);
}

#[test]
fn test_parallel_run_matches_fitted_distribution() {
    // Zero-mean fitted Normal: success rate should hover around one half
    let snapshot = choppy_snapshot();
    let engine = StrategyEngine::default();

    let result = engine.run_simulation_trials(100.0, &snapshot, 1000).unwrap();
    assert_eq!(result.trials, 1000);
    assert!(result.avg_return.is_finite());
    assert!(result.avg_return.abs() < 0.01);
    assert!(result.success_rate > 0.4 && result.success_rate < 0.6);
}

#[test]
fn test_short_history_propagates_indicator_error() {
    let snapshot = IndicatorSnapshot {
        closes: vec![100.0],
        sma: 100.0,
        sma_window: 20,
        rsi: 50.0,
        rsi_period: 14,
        support: 100.0,
        resistance: 100.0,
        computed_at: Utc::now(),
    };

    assert!(matches!(
        simulation::run_simulation(100.0, &snapshot, 100),
        Err(EngineError::Indicator(IndicatorError::InsufficientData { .. }))
    ));
}

#[test]
fn test_degenerate_price_rejected() {
    let snapshot = choppy_snapshot();
    for bad in [f64::NAN, 0.0, -10.0] {
        assert!(matches!(
            simulation::run_simulation(bad, &snapshot, 100),
            Err(EngineError::DegenerateInput(_))
        ));
    }
}
