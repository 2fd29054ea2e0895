//! Support and resistance levels

use crate::indicators::error::IndicatorError;

/// Support and resistance as the min/max close over the last `window`
/// observations. Returns `(support, resistance)`.
pub fn support_resistance(closes: &[f64], window: usize) -> Result<(f64, f64), IndicatorError> {
    if window == 0 || closes.len() < window {
        return Err(IndicatorError::InsufficientData {
            indicator: "support_resistance",
            required: window.max(1),
            actual: closes.len(),
        });
    }

    let tail = &closes[closes.len() - window..];
    let support = tail.iter().copied().fold(f64::INFINITY, f64::min);
    let resistance = tail.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((support, resistance))
}
