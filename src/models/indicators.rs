//! Derived market indicator data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable bundle of indicators derived from one close-price series.
///
/// Built fresh on every market-data update and replaced wholesale; it is
/// never mutated in place. The raw closes are retained because the
/// volatility-scaled profit target and the Monte Carlo simulation both
/// re-derive the log-return series from them downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Chronological close prices the snapshot was computed from
    pub closes: Vec<f64>,
    /// Arithmetic mean of the last `sma_window` closes
    pub sma: f64,
    pub sma_window: usize,
    /// Relative Strength Index in [0, 100]
    pub rsi: f64,
    pub rsi_period: usize,
    /// Minimum close over the structure lookback window
    pub support: f64,
    /// Maximum close over the structure lookback window
    pub resistance: f64,
    pub computed_at: DateTime<Utc>,
}

impl IndicatorSnapshot {
    /// Most recent close in the underlying series.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
