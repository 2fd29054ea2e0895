//! RSI (Relative Strength Index) indicator

use crate::indicators::error::IndicatorError;

/// Calculate RSI over the last `period` price changes.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Returns exactly 100 when the average loss over the window is zero
/// (monotonically rising or flat series), avoiding the division.
pub fn rsi(closes: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 || closes.len() < period + 1 {
        return Err(IndicatorError::InsufficientData {
            indicator: "rsi",
            required: period + 1,
            actual: closes.len(),
        });
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);

    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let avg_gain: f64 = gains.iter().rev().take(period).sum::<f64>() / period as f64;
    let avg_loss: f64 = losses.iter().rev().take(period).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}
