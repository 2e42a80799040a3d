//! Market data provider interface consumed by the signal tools.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::models::candle::Candle;
use crate::services::binance::ExchangeError;

#[async_trait]
pub trait MarketDataProvider {
    /// Historical candles for `symbol` at `interval`, oldest first, at most `limit` of them.
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<Candle>, ExchangeError>;

    /// Current average price for `symbol`.
    async fn latest_price(&self, symbol: &str) -> Result<Decimal, ExchangeError>;
}
