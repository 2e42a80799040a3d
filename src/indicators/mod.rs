//! Indicator math over candle sequences.
//!
//! Each indicator exposes a `*_series` function returning one value per
//! candle and a `calculate_*` function returning the value at the latest bar.

pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
