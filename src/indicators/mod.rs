//! Pure technical-indicator functions over close-price series.
//!
//! Every function here is deterministic and side-effect free: same input,
//! same output, no retained state.

pub mod error;
pub mod snapshot;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
pub use snapshot::compute_snapshot;
