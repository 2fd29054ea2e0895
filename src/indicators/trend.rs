//! SMA (Simple Moving Average) indicator

use crate::indicators::error::IndicatorError;

/// Calculate the simple moving average over the last `window` closes.
pub fn sma(closes: &[f64], window: usize) -> Result<f64, IndicatorError> {
    if window == 0 || closes.len() < window {
        return Err(IndicatorError::InsufficientData {
            indicator: "sma",
            required: window.max(1),
            actual: closes.len(),
        });
    }

    let tail = &closes[closes.len() - window..];
    Ok(tail.iter().sum::<f64>() / window as f64)
}
