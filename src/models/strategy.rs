//! Risk-tier configuration and strategy output data models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::error::EngineError;

/// Named risk bucket selecting a row of the [`RiskTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "low"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskTier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "medium" => Ok(RiskTier::Medium),
            "high" => Ok(RiskTier::High),
            other => Err(EngineError::UnknownRiskTier(other.to_string())),
        }
    }
}

/// Immutable parameter tuple bound to one risk tier.
///
/// `win_rate` is a stated assumption surfaced in the report, not a value
/// the engine derives; the empirical counterpart comes from the simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskProfile {
    pub leverage: u32,
    /// Assumed win probability in (0, 1)
    pub win_rate: f64,
    /// Stop-loss distance as a fraction of entry, in (0, 1)
    pub stop_loss_fraction: f64,
}

/// The full tier-to-parameters mapping.
///
/// This is policy configuration, not derived data: callers may override any
/// row before handing the table to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskTable {
    pub low: RiskProfile,
    pub medium: RiskProfile,
    pub high: RiskProfile,
}

impl Default for RiskTable {
    fn default() -> Self {
        Self {
            low: RiskProfile {
                leverage: 5,
                win_rate: 0.65,
                stop_loss_fraction: 0.03,
            },
            medium: RiskProfile {
                leverage: 10,
                win_rate: 0.55,
                stop_loss_fraction: 0.05,
            },
            high: RiskProfile {
                leverage: 20,
                win_rate: 0.45,
                stop_loss_fraction: 0.08,
            },
        }
    }
}

impl RiskTable {
    pub fn profile(&self, tier: RiskTier) -> &RiskProfile {
        match tier {
            RiskTier::Low => &self.low,
            RiskTier::Medium => &self.medium,
            RiskTier::High => &self.high,
        }
    }
}

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "long"),
            Direction::Short => write!(f, "short"),
        }
    }
}

/// Fully parametrized trade plan produced by the strategy engine.
///
/// Ephemeral: derived deterministically from (current price, snapshot,
/// risk profile) and recomputed on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    pub direction: Direction,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub leverage: u32,
    /// Position size in asset units
    pub position_size: f64,
    /// Reward-to-risk ratio, rounded to one decimal
    pub risk_reward: f64,
    /// Stated win-rate assumption from the risk profile, in (0, 1)
    pub win_rate: f64,
    pub liquidation_price: f64,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x | entry {:.2} sl {:.2} tp {:.2} liq {:.2} | size {:.4} | rr 1:{} | win {:.0}%",
            self.direction,
            self.leverage,
            self.entry_price,
            self.stop_loss,
            self.take_profit,
            self.liquidation_price,
            self.position_size,
            self.risk_reward,
            self.win_rate * 100.0
        )
    }
}
