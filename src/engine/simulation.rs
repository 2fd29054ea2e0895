//! Monte Carlo outcome simulation
//!
//! Parametric single-step bootstrap: a Normal distribution is fitted to the
//! historical log returns and each trial draws one return, jumps the current
//! price by it, and records the fractional profit. No multi-step paths, no
//! autocorrelation, no volatility clustering.

use rand::distributions::Distribution;
use rand::Rng;
use rayon::prelude::*;
use statrs::distribution::Normal;
use tracing::debug;

use crate::engine::error::EngineError;
use crate::indicators::volatility;
use crate::models::{IndicatorSnapshot, SimulationResult};

/// Return distribution fitted to the snapshot's history.
///
/// Zero-variance history collapses to a point mass at the mean return
/// rather than failing: every trial then yields the same profit, which is
/// exactly what sampling a degenerate Normal would produce.
enum ReturnModel {
    PointMass(f64),
    Normal(Normal),
}

/// Run `n_trials` independent draws in parallel and summarize them.
///
/// Trials are independent, so the accumulation is a map-reduce over
/// partitioned trial ranges with no shared mutable state.
pub fn run_simulation(
    current_price: f64,
    snapshot: &IndicatorSnapshot,
    n_trials: usize,
) -> Result<SimulationResult, EngineError> {
    let model = fit_returns(current_price, snapshot, n_trials)?;

    let result = match model {
        ReturnModel::PointMass(mean) => point_mass_result(current_price, mean, n_trials),
        ReturnModel::Normal(normal) => {
            let (profit_sum, wins) = (0..n_trials)
                .into_par_iter()
                .map_init(rand::thread_rng, |rng, _| {
                    fractional_profit(current_price, normal.sample(rng))
                })
                .fold(
                    || (0.0_f64, 0_usize),
                    |(sum, wins), profit| (sum + profit, wins + usize::from(profit > 0.0)),
                )
                .reduce(|| (0.0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

            summarize(profit_sum, wins, n_trials)
        }
    };

    debug!(
        trials = n_trials,
        avg_return = result.avg_return,
        success_rate = result.success_rate,
        "simulation complete"
    );

    Ok(result)
}

/// Sequential variant taking an explicit RNG, for deterministic seeding.
pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    current_price: f64,
    snapshot: &IndicatorSnapshot,
    n_trials: usize,
    rng: &mut R,
) -> Result<SimulationResult, EngineError> {
    let model = fit_returns(current_price, snapshot, n_trials)?;

    match model {
        ReturnModel::PointMass(mean) => Ok(point_mass_result(current_price, mean, n_trials)),
        ReturnModel::Normal(normal) => {
            let mut profit_sum = 0.0;
            let mut wins = 0;
            for _ in 0..n_trials {
                let profit = fractional_profit(current_price, normal.sample(rng));
                profit_sum += profit;
                if profit > 0.0 {
                    wins += 1;
                }
            }
            Ok(summarize(profit_sum, wins, n_trials))
        }
    }
}

fn fit_returns(
    current_price: f64,
    snapshot: &IndicatorSnapshot,
    n_trials: usize,
) -> Result<ReturnModel, EngineError> {
    if n_trials == 0 {
        return Err(EngineError::DegenerateInput(
            "simulation requires at least one trial".to_string(),
        ));
    }
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(EngineError::DegenerateInput(format!(
            "current price must be positive and finite, got {current_price}"
        )));
    }

    let returns = volatility::log_returns(&snapshot.closes)?;
    let (mean, std) = volatility::return_stats(&returns);

    if !mean.is_finite() || !std.is_finite() {
        return Err(EngineError::DegenerateInput(format!(
            "non-finite return statistics (mean {mean}, std {std})"
        )));
    }

    if std == 0.0 {
        return Ok(ReturnModel::PointMass(mean));
    }

    Normal::new(mean, std)
        .map(ReturnModel::Normal)
        .map_err(|e| EngineError::DegenerateInput(e.to_string()))
}

fn fractional_profit(current_price: f64, log_return: f64) -> f64 {
    let simulated_price = current_price * log_return.exp();
    (simulated_price - current_price) / current_price
}

fn point_mass_result(current_price: f64, mean: f64, n_trials: usize) -> SimulationResult {
    let profit = fractional_profit(current_price, mean);
    SimulationResult {
        avg_return: profit,
        success_rate: if profit > 0.0 { 1.0 } else { 0.0 },
        trials: n_trials,
    }
}

fn summarize(profit_sum: f64, wins: usize, n_trials: usize) -> SimulationResult {
    SimulationResult {
        avg_return: profit_sum / n_trials as f64,
        success_rate: wins as f64 / n_trials as f64,
        trials: n_trials,
    }
}
