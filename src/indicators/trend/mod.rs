//! Trend indicators: EMA, Ichimoku Cloud

pub mod ema;
pub mod ichimoku;

pub use ema::*;
pub use ichimoku::*;
