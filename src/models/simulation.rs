//! Monte Carlo simulation output data model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary statistics over independent simulated trade outcomes.
///
/// Ephemeral by design: never cached across calls, because the fitted
/// return distribution shifts whenever the close-price history does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Mean fractional profit across all trials (0.01 = +1%)
    pub avg_return: f64,
    /// Fraction of trials with strictly positive profit, in [0, 1]
    pub success_rate: f64,
    pub trials: usize,
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg return {:.2}%, success rate {:.1}% over {} trials",
            self.avg_return * 100.0,
            self.success_rate * 100.0,
            self.trials
        )
    }
}
