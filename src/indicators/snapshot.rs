//! Snapshot assembly from a raw close-price series

use chrono::Utc;
use tracing::debug;

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::{momentum, structure, trend};
use crate::models::IndicatorSnapshot;

/// Compute a full [`IndicatorSnapshot`] from a chronological close series.
///
/// Validates every close up front (positive, finite), then computes each
/// indicator with its configured window. Any window the series cannot
/// cover fails the whole snapshot; nothing is truncated or defaulted.
pub fn compute_snapshot(
    closes: &[f64],
    config: &IndicatorConfig,
) -> Result<IndicatorSnapshot, IndicatorError> {
    for (index, &value) in closes.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(IndicatorError::InvalidPrice { index, value });
        }
    }

    let sma = trend::sma(closes, config.sma_window)?;
    let rsi = momentum::rsi(closes, config.rsi_period)?;
    let (support, resistance) =
        structure::support_resistance(closes, config.support_resistance_window)?;

    debug!(
        closes = closes.len(),
        sma, rsi, support, resistance, "computed indicator snapshot"
    );

    Ok(IndicatorSnapshot {
        closes: closes.to_vec(),
        sma,
        sma_window: config.sma_window,
        rsi,
        rsi_period: config.rsi_period,
        support,
        resistance,
        computed_at: Utc::now(),
    })
}
