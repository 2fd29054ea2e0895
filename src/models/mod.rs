//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod simulation;
pub mod strategy;

pub use indicators::IndicatorSnapshot;
pub use simulation::SimulationResult;
pub use strategy::{Direction, RiskProfile, RiskTable, RiskTier, StrategyReport};
