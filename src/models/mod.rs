//! Shared data models spanning the tool layers.

pub mod account;
pub mod candle;
pub mod indicators;
pub mod series;
pub mod signal;

pub use account::{
    AccountBalance, AvgPrice, OrderRequest, OrderSide, OrderType, SymbolInfo, SymbolPrice, Trade,
};
pub use candle::Candle;
pub use indicators::{
    AtrIndicator, BollingerBandsIndicator, IchimokuIndicator, MacdIndicator, RsiIndicator,
};
pub use series::IndicatorSeries;
pub use signal::{Signal, TradeLevels};
