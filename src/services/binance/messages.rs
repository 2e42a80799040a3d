//! Wire formats of the Binance spot REST API and their conversion into models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::error::ExchangeError;
use crate::models::account::{AccountBalance, AvgPrice, SymbolInfo, SymbolPrice, Trade};
use crate::models::candle::Candle;

/// `{code, msg}` body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: i64,
    pub msg: String,
}

/// One `/api/v3/klines` row:
/// `[openTime, open, high, low, close, volume, closeTime, quoteVolume, trades, ...]`
/// with prices and volumes encoded as strings.
pub type KlineRow = Vec<Value>;

pub fn parse_kline(row: &[Value]) -> Result<Candle, ExchangeError> {
    if row.len() < 6 {
        return Err(ExchangeError::Decode(format!(
            "kline row has {} fields, expected at least 6",
            row.len()
        )));
    }

    let open_time = row[0]
        .as_i64()
        .ok_or_else(|| ExchangeError::Decode(format!("kline open time {} is not an integer", row[0])))?;

    Ok(Candle::new(
        number_field("open", &row[1])?,
        number_field("high", &row[2])?,
        number_field("low", &row[3])?,
        number_field("close", &row[4])?,
        number_field("volume", &row[5])?,
        millis_to_datetime(open_time)?,
    ))
}

fn number_field(name: &str, value: &Value) -> Result<f64, ExchangeError> {
    let parsed = match value {
        Value::String(s) => s.parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ExchangeError::Decode(format!("kline {} {} is not a number", name, value)))
}

pub fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, ExchangeError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ExchangeError::Decode(format!("timestamp {} is out of range", millis)))
}

#[derive(Debug, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    pub price: Decimal,
}

impl From<TickerPrice> for SymbolPrice {
    fn from(ticker: TickerPrice) -> Self {
        SymbolPrice {
            symbol: ticker.symbol,
            price: ticker.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AvgPriceResponse {
    pub mins: u32,
    pub price: Decimal,
}

impl From<AvgPriceResponse> for AvgPrice {
    fn from(avg: AvgPriceResponse) -> Self {
        AvgPrice {
            mins: avg.mins,
            price: avg.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExchangeInfoResponse {
    pub symbols: Vec<SymbolEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntry {
    pub symbol: String,
    pub base_asset: String,
    pub quote_asset: String,
    #[serde(default)]
    pub filters: Vec<SymbolFilter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolFilter {
    pub filter_type: String,
    #[serde(default)]
    pub step_size: Option<Decimal>,
}

impl From<SymbolEntry> for SymbolInfo {
    fn from(entry: SymbolEntry) -> Self {
        let step_size = entry
            .filters
            .iter()
            .find(|f| f.filter_type == "LOT_SIZE")
            .and_then(|f| f.step_size);

        SymbolInfo {
            symbol: entry.symbol,
            base_asset: entry.base_asset,
            quote_asset: entry.quote_asset,
            step_size,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub balances: Vec<BalanceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BalanceEntry {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
}

impl From<BalanceEntry> for AccountBalance {
    fn from(entry: BalanceEntry) -> Self {
        AccountBalance {
            asset: entry.asset,
            free: entry.free,
            locked: entry.locked,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEntry {
    pub symbol: String,
    pub price: Decimal,
    pub qty: Decimal,
    pub is_buyer: bool,
    pub time: i64,
}

impl TryFrom<TradeEntry> for Trade {
    type Error = ExchangeError;

    fn try_from(entry: TradeEntry) -> Result<Self, Self::Error> {
        Ok(Trade {
            symbol: entry.symbol,
            price: entry.price,
            qty: entry.qty,
            is_buyer: entry.is_buyer,
            time: millis_to_datetime(entry.time)?,
        })
    }
}
