//! Strategy engine errors

use thiserror::Error;

use crate::indicators::IndicatorError;

/// Failure modes of strategy generation and simulation.
///
/// Raised synchronously at the point of detection and never retried
/// internally; retry policy (e.g. fetching fresher market data) belongs
/// to the caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error("unknown risk tier '{0}', expected one of: low, medium, high")]
    UnknownRiskTier(String),

    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}
