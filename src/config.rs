//! Engine policy configuration.
//!
//! Every numeric policy constant the reference behavior bakes in (risk
//! table, maintenance-margin share, per-trade risk, profit-target cap,
//! re-anchor threshold) is a field here so callers can inspect or override
//! it instead of relying on hardcoded values.

use std::env;

use serde::{Deserialize, Serialize};

use crate::models::RiskTable;

/// Deployment environment name, from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Lookback windows for the indicator snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub sma_window: usize,
    pub rsi_period: usize,
    pub support_resistance_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_window: 20,
            rsi_period: 14,
            support_resistance_window: 24,
        }
    }
}

/// Full engine policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub indicators: IndicatorConfig,
    pub risk_table: RiskTable,
    /// Share of posted margin whose consumption triggers liquidation.
    /// A linear approximation of exchange maintenance-margin tables.
    pub maintenance_margin_complement: f64,
    /// Fraction of the notional account risked per trade
    pub risk_per_trade: f64,
    /// Notional account size the position sizing is denominated against
    pub account_notional: f64,
    /// Upper bound on the volatility-scaled take-profit fraction
    pub take_profit_cap: f64,
    /// Multiple of annualized volatility used for the profit target
    pub volatility_multiple: f64,
    /// Absolute price move beyond which a stored reference price is stale
    pub drift_threshold: f64,
    /// Trial count used when the caller does not specify one
    pub default_trials: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorConfig::default(),
            risk_table: RiskTable::default(),
            maintenance_margin_complement: 0.9,
            risk_per_trade: 0.01,
            account_notional: 100.0,
            take_profit_cap: 0.15,
            volatility_multiple: 2.0,
            drift_threshold: 10.0,
            default_trials: 1000,
        }
    }
}

impl EngineConfig {
    /// Whether `current` has moved far enough from `reference` that a
    /// caller holding `reference` should re-anchor and recompute. The
    /// engine itself keeps no reference price; this check belongs to the
    /// caller's refresh loop.
    pub fn price_drifted(&self, reference: f64, current: f64) -> bool {
        (reference - current).abs() > self.drift_threshold
    }
}
