//! Log-return statistics and annualized volatility

use crate::indicators::error::IndicatorError;

/// Annualization factor for a series sampled once per day.
pub const PERIODS_PER_YEAR: f64 = 365.0;

/// Per-step log returns `ln(closes[i] / closes[i-1])`.
pub fn log_returns(closes: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    if closes.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            indicator: "log_returns",
            required: 2,
            actual: closes.len(),
        });
    }

    Ok(closes.windows(2).map(|pair| (pair[1] / pair[0]).ln()).collect())
}

/// Mean and population standard deviation of a return series.
///
/// Population (biased) standard deviation, no Bessel correction: the
/// variance is taken over all observed returns as-is. Keeps volatility
/// and the fitted simulation distribution deterministic relative to the
/// reference semantics.
pub fn return_stats(returns: &[f64]) -> (f64, f64) {
    if returns.is_empty() {
        return (0.0, 0.0);
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Annualized volatility: population stdev of log returns scaled by √365.
pub fn annualized_volatility(closes: &[f64]) -> Result<f64, IndicatorError> {
    let returns = log_returns(closes)?;
    let (_, std) = return_stats(&returns);
    Ok(std * PERIODS_PER_YEAR.sqrt())
}
