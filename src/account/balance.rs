//! Account value in BTC.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::error::AccountError;
use crate::error::Error;
use crate::models::account::{AccountBalance, SymbolPrice};
use crate::services::binance::BinanceClient;

pub const BTC: &str = "BTC";
pub const USDT: &str = "USDT";
pub const BTC_USDT: &str = "BTCUSDT";

/// Balances worth less than this in BTC are counted but not listed.
pub const DISPLAY_THRESHOLD_BTC: Decimal = dec!(0.0001);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceLine {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
    pub btc_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    /// Holdings above [`DISPLAY_THRESHOLD_BTC`], in account order.
    pub lines: Vec<BalanceLine>,
    pub total_btc: Decimal,
    pub opening_balance_btc: Decimal,
    /// Change of `total_btc` against the opening balance, in percent.
    pub change_pct: Decimal,
}

/// BTC value of `amount` units of `asset`.
///
/// BTC counts at par, USDT converts through BTCUSDT, anything else through
/// `<ASSET>BTC`. Assets without a BTC pair are worth zero.
pub fn btc_value(
    asset: &str,
    amount: Decimal,
    prices: &HashMap<&str, Decimal>,
) -> Result<Decimal, AccountError> {
    match asset {
        BTC => Ok(amount),
        USDT => {
            let btc_usdt = prices
                .get(BTC_USDT)
                .copied()
                .ok_or_else(|| AccountError::MissingPrice(BTC_USDT.to_string()))?;
            if btc_usdt <= Decimal::ZERO {
                return Err(AccountError::NonPositivePrice(btc_usdt));
            }
            Ok(amount / btc_usdt)
        }
        other => {
            let pair = format!("{}{}", other, BTC);
            Ok(prices
                .get(pair.as_str())
                .map(|price| amount * *price)
                .unwrap_or(Decimal::ZERO))
        }
    }
}

/// Value every non-empty balance in BTC and compare the total with `opening_balance_btc`.
pub fn summarize_balances(
    balances: &[AccountBalance],
    prices: &[SymbolPrice],
    opening_balance_btc: Decimal,
) -> Result<BalanceReport, AccountError> {
    if opening_balance_btc <= Decimal::ZERO {
        return Err(AccountError::InvalidOpeningBalance(opening_balance_btc));
    }

    let price_map: HashMap<&str, Decimal> = prices
        .iter()
        .map(|p| (p.symbol.as_str(), p.price))
        .collect();

    let mut lines = Vec::new();
    let mut total_btc = Decimal::ZERO;

    for balance in balances.iter().filter(|b| b.total() > Decimal::ZERO) {
        let value = btc_value(&balance.asset, balance.total(), &price_map)?;
        total_btc += value;

        if value > DISPLAY_THRESHOLD_BTC {
            lines.push(BalanceLine {
                asset: balance.asset.clone(),
                free: balance.free,
                locked: balance.locked,
                btc_value: value,
            });
        } else {
            debug!(asset = %balance.asset, %value, "Below display threshold");
        }
    }

    let change_pct = (total_btc - opening_balance_btc) / opening_balance_btc * dec!(100);

    Ok(BalanceReport {
        lines,
        total_btc,
        opening_balance_btc,
        change_pct,
    })
}

/// Fetch balances and prices and build the report.
pub async fn fetch_balance_report(
    client: &BinanceClient,
    opening_balance_btc: Decimal,
) -> Result<BalanceReport, Error> {
    let balances = client.account_balances().await?;
    let prices = client.ticker_prices().await?;
    Ok(summarize_balances(&balances, &prices, opening_balance_btc)?)
}
