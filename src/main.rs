use std::env;

use dotenvy::dotenv;
use levara::config::EngineConfig;
use levara::engine::StrategyEngine;
use levara::indicators::compute_snapshot;
use levara::models::RiskTier;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    levara::logging::init_logging();

    let tier: RiskTier = env::var("RISK_TIER")
        .unwrap_or_else(|_| "medium".to_string())
        .parse()?;

    let closes = sample_series();
    let config = EngineConfig::default();
    let snapshot = compute_snapshot(&closes, &config.indicators)?;
    let current_price = closes[closes.len() - 1];

    info!(
        price = current_price,
        sma = snapshot.sma,
        rsi = snapshot.rsi,
        support = snapshot.support,
        resistance = snapshot.resistance,
        "market snapshot"
    );

    let engine = StrategyEngine::new(config);

    let report = engine.generate_strategy(current_price, &snapshot, tier)?;
    println!("Strategy ({tier}):");
    println!("{}", serde_json::to_string_pretty(&report)?);

    let outcome = engine.run_simulation(current_price, &snapshot)?;
    println!("Simulation: {outcome}");

    Ok(())
}

/// Synthetic hourly ETH-like close series: mild uptrend with a cyclical
/// wiggle, stands in for the exchange feed this binary does not talk to.
fn sample_series() -> Vec<f64> {
    (0..60)
        .map(|i| {
            let t = i as f64;
            2400.0 + t * 1.8 + (t * 0.7).sin() * 14.0
        })
        .collect()
}
