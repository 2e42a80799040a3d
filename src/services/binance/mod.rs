//! Binance spot REST client.

pub mod client;
pub mod error;
pub mod messages;
pub mod provider;
pub mod signer;

pub use client::{BinanceClient, DEFAULT_KLINE_LIMIT, KLINE_INTERVALS, MAX_KLINE_LIMIT};
pub use error::ExchangeError;
pub use signer::RequestSigner;
