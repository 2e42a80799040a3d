//! Fee-adjusted breakeven prices.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::AccountError;
use crate::error::Error;
use crate::models::account::{OrderSide, SymbolInfo, Trade};
use crate::services::binance::BinanceClient;

/// Price at which closing a fill at `price` recovers both legs' fees.
///
/// After a BUY the exit must reach `price * (1 + fee) / (1 - fee)`; after a
/// SELL the re-entry must drop to `price * (1 - fee) / (1 + fee)`.
pub fn breakeven_after_trade(price: Decimal, side: OrderSide, fee_rate: Decimal) -> Decimal {
    match side {
        OrderSide::Buy => price * (Decimal::ONE + fee_rate) / (Decimal::ONE - fee_rate),
        OrderSide::Sell => price * (Decimal::ONE - fee_rate) / (Decimal::ONE + fee_rate),
    }
}

/// Approximate round-trip breakeven covering two fees on the current price.
pub fn round_trip_breakeven(price: Decimal, side: OrderSide, fee_rate: Decimal) -> Decimal {
    let two_fees = Decimal::ONE + dec!(2) * fee_rate;
    match side {
        OrderSide::Buy => price * two_fees,
        OrderSide::Sell => price / two_fees,
    }
}

/// `(value - reference) / reference` in percent.
pub fn percentage_difference(value: Decimal, reference: Decimal) -> Result<Decimal, AccountError> {
    if reference <= Decimal::ZERO {
        return Err(AccountError::NonPositivePrice(reference));
    }
    Ok((value - reference) / reference * dec!(100))
}

/// "D days, H hours, M minutes, S seconds". Negative spans read as zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!(
        "{} days, {} hours, {} minutes, {} seconds",
        days, hours, minutes, seconds
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakevenReport {
    pub symbol: SymbolInfo,
    pub last_trade: Trade,
    pub current_price: Decimal,
    pub breakeven_price: Decimal,
    /// Current price against breakeven, in percent.
    pub difference_pct: Decimal,
    pub elapsed: String,
}

/// Breakeven of the latest fill on `symbol`, measured against the current average price.
pub fn build_breakeven_report(
    symbol: SymbolInfo,
    last_trade: Trade,
    current_price: Decimal,
    fee_rate: Decimal,
    now: DateTime<Utc>,
) -> Result<BreakevenReport, AccountError> {
    let breakeven_price = breakeven_after_trade(last_trade.price, last_trade.side(), fee_rate);
    let difference_pct = percentage_difference(current_price, breakeven_price)?;
    let elapsed = format_elapsed(now - last_trade.time);

    Ok(BreakevenReport {
        symbol,
        last_trade,
        current_price,
        breakeven_price,
        difference_pct,
        elapsed,
    })
}

pub async fn fetch_breakeven_report(
    client: &BinanceClient,
    symbol: &str,
    fee_rate: Decimal,
) -> Result<BreakevenReport, Error> {
    let last_trade = client
        .last_trade(symbol)
        .await?
        .ok_or_else(|| AccountError::NoTrades(symbol.to_string()))?;
    let info = client.symbol_info(symbol).await?;
    let current_price = client.avg_price(symbol).await?.price;

    Ok(build_breakeven_report(
        info,
        last_trade,
        current_price,
        fee_rate,
        Utc::now(),
    )?)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    pub symbol: SymbolInfo,
    pub side: OrderSide,
    pub current_price: Decimal,
    pub breakeven_price: Decimal,
}

pub async fn fetch_price_report(
    client: &BinanceClient,
    symbol: &str,
    side: OrderSide,
    fee_rate: Decimal,
) -> Result<PriceReport, Error> {
    let current_price = client.ticker_price(symbol).await?.price;
    let info = client.symbol_info(symbol).await?;

    Ok(PriceReport {
        symbol: info,
        side,
        current_price,
        breakeven_price: round_trip_breakeven(current_price, side, fee_rate),
    })
}
