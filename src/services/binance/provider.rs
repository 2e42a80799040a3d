use async_trait::async_trait;
use rust_decimal::Decimal;

use super::client::BinanceClient;
use super::error::ExchangeError;
use crate::models::candle::Candle;
use crate::services::market_data::MarketDataProvider;

#[async_trait]
impl MarketDataProvider for BinanceClient {
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<Candle>, ExchangeError> {
        self.klines(symbol, interval, limit).await
    }

    async fn latest_price(&self, symbol: &str) -> Result<Decimal, ExchangeError> {
        Ok(self.avg_price(symbol).await?.price)
    }
}
