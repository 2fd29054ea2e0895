//! Deterministic leverage-strategy derivation

use chrono::Utc;
use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::indicators::volatility;
use crate::models::{Direction, IndicatorSnapshot, RiskTier, StrategyReport};

/// Derive a full trade plan from the current price, an indicator snapshot,
/// and a risk tier.
///
/// Direction is a single trend filter: long above the SMA, short at or
/// below it. No smoothing, no hysteresis.
pub fn generate_strategy(
    current_price: f64,
    snapshot: &IndicatorSnapshot,
    tier: RiskTier,
    config: &EngineConfig,
) -> Result<StrategyReport, EngineError> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(EngineError::DegenerateInput(format!(
            "current price must be positive and finite, got {current_price}"
        )));
    }

    let profile = config.risk_table.profile(tier);

    let direction = if current_price > snapshot.sma {
        Direction::Long
    } else {
        Direction::Short
    };
    let entry = current_price;

    let stop_loss = match direction {
        Direction::Long => entry * (1.0 - profile.stop_loss_fraction),
        Direction::Short => entry * (1.0 + profile.stop_loss_fraction),
    };

    // Volatility-scaled profit target, capped.
    let volatility = volatility::annualized_volatility(&snapshot.closes)?;
    let take_profit_fraction = config
        .take_profit_cap
        .min(volatility * config.volatility_multiple);
    let take_profit = match direction {
        Direction::Long => entry * (1.0 + take_profit_fraction),
        Direction::Short => entry * (1.0 - take_profit_fraction),
    };

    // A positive stop_loss_fraction makes a zero stop distance impossible,
    // but a caller-overridden risk table can break that, so assert it.
    let stop_distance = (entry - stop_loss).abs();
    if stop_distance == 0.0 {
        return Err(EngineError::DegenerateInput(
            "entry equals stop-loss, cannot size position".to_string(),
        ));
    }

    // Size the position so the loss at the stop equals the configured
    // fraction of the notional account.
    let position_size = (config.risk_per_trade * config.account_notional) / stop_distance;

    let liquidation_price = liquidation_price(
        entry,
        profile.leverage,
        direction,
        config.maintenance_margin_complement,
    );

    let risk_reward = round_one_decimal(take_profit_fraction / profile.stop_loss_fraction);

    debug!(
        %direction,
        %tier,
        entry,
        stop_loss,
        take_profit,
        volatility,
        position_size,
        liquidation_price,
        "generated strategy"
    );

    Ok(StrategyReport {
        direction,
        entry_price: entry,
        stop_loss,
        take_profit,
        leverage: profile.leverage,
        position_size,
        risk_reward,
        win_rate: profile.win_rate,
        liquidation_price,
        generated_at: Utc::now(),
    })
}

/// Linear liquidation approximation: the price move that consumes the
/// configured share of margin at the given leverage. Real exchanges use
/// maintenance-margin tables; this model is deliberately simpler.
fn liquidation_price(
    entry: f64,
    leverage: u32,
    direction: Direction,
    maintenance_margin_complement: f64,
) -> f64 {
    let offset = maintenance_margin_complement / leverage as f64;
    match direction {
        Direction::Long => entry * (1.0 - offset),
        Direction::Short => entry * (1.0 + offset),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
