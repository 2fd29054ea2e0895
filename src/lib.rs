//! # levara
//!
//! Leverage strategy generation and risk-simulation engine for crypto
//! assets.
//!
//! The crate turns a chronological close-price series plus a risk-tier
//! selection into a concrete, numerically consistent trade plan (direction,
//! entry/stop/target, position size, liquidation price) and a Monte Carlo
//! estimate of the outcome distribution.
//!
//! ```no_run
//! use levara::config::EngineConfig;
//! use levara::engine::StrategyEngine;
//! use levara::indicators::compute_snapshot;
//! use levara::models::RiskTier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let closes: Vec<f64> = (0..30).map(|i| 2400.0 + i as f64 * 3.0).collect();
//! let config = EngineConfig::default();
//! let snapshot = compute_snapshot(&closes, &config.indicators)?;
//!
//! let engine = StrategyEngine::new(config);
//! let report = engine.generate_strategy(2495.0, &snapshot, RiskTier::Medium)?;
//! let outcome = engine.run_simulation(2495.0, &snapshot)?;
//! println!("{report}\n{outcome}");
//! # Ok(())
//! # }
//! ```
//!
//! Market-data retrieval, chat/LLM plumbing, and order placement are
//! external collaborators; this crate is pure CPU-bound computation.

pub mod config;
pub mod engine;
pub mod indicators;
pub mod logging;
pub mod models;

pub use config::{get_environment, EngineConfig, IndicatorConfig};
pub use engine::{EngineError, StrategyEngine};
pub use indicators::{compute_snapshot, IndicatorError};
pub use models::{
    Direction, IndicatorSnapshot, RiskProfile, RiskTable, RiskTier, SimulationResult,
    StrategyReport,
};
