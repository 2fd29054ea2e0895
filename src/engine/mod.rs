//! Strategy generation and risk-simulation engine.
//!
//! The engine is stateless with respect to market data: callers pass the
//! current price and an [`IndicatorSnapshot`] on every call, and own the
//! decision of when the market has drifted far enough to recompute (see
//! [`EngineConfig::price_drifted`](crate::config::EngineConfig::price_drifted)).
//! Only policy configuration lives on the engine instance, so a single
//! instance may be shared freely across threads.

pub mod error;
pub mod simulation;
pub mod strategy;

pub use error::EngineError;

use rand::Rng;

use crate::config::EngineConfig;
use crate::models::{IndicatorSnapshot, RiskTier, SimulationResult, StrategyReport};

/// Facade bundling the policy configuration with the engine operations.
#[derive(Debug, Clone, Default)]
pub struct StrategyEngine {
    config: EngineConfig,
}

impl StrategyEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive a trade plan. See [`strategy::generate_strategy`].
    pub fn generate_strategy(
        &self,
        current_price: f64,
        snapshot: &IndicatorSnapshot,
        tier: RiskTier,
    ) -> Result<StrategyReport, EngineError> {
        strategy::generate_strategy(current_price, snapshot, tier, &self.config)
    }

    /// Run the Monte Carlo outcome simulation with the configured default
    /// trial count. See [`simulation::run_simulation`].
    pub fn run_simulation(
        &self,
        current_price: f64,
        snapshot: &IndicatorSnapshot,
    ) -> Result<SimulationResult, EngineError> {
        simulation::run_simulation(current_price, snapshot, self.config.default_trials)
    }

    /// Run the simulation with an explicit trial count.
    pub fn run_simulation_trials(
        &self,
        current_price: f64,
        snapshot: &IndicatorSnapshot,
        n_trials: usize,
    ) -> Result<SimulationResult, EngineError> {
        simulation::run_simulation(current_price, snapshot, n_trials)
    }

    /// Seedable sequential simulation, mainly for reproducible tests.
    pub fn run_simulation_with_rng<R: Rng + ?Sized>(
        &self,
        current_price: f64,
        snapshot: &IndicatorSnapshot,
        n_trials: usize,
        rng: &mut R,
    ) -> Result<SimulationResult, EngineError> {
        simulation::run_simulation_with_rng(current_price, snapshot, n_trials, rng)
    }
}
