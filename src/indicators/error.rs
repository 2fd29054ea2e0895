//! Indicator computation errors

use thiserror::Error;

/// Failure modes of the pure indicator functions.
///
/// A series that is too short for a lookback window is always a hard error;
/// indicators never silently truncate or substitute defaults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("{indicator} requires at least {required} closes, got {actual}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("close price at index {index} is not positive and finite: {value}")]
    InvalidPrice { index: usize, value: f64 },
}
