//! Exchange-facing services.

pub mod binance;
pub mod market_data;

pub use binance::{BinanceClient, ExchangeError};
pub use market_data::MarketDataProvider;
