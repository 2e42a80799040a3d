//! Sizing and validation of market and limit orders.
//!
//! An order always commits the whole free balance of the asset it spends:
//! the quote asset for a BUY, the base asset for a SELL.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::info;

use super::error::AccountError;
use crate::error::Error;
use crate::models::account::{OrderRequest, OrderSide, SymbolInfo};
use crate::services::binance::BinanceClient;

/// Number of decimals the `LOT_SIZE` step allows (`0.00100000` -> 3).
pub fn step_decimals(step_size: Decimal) -> u32 {
    step_size.normalize().scale()
}

/// Truncate `quantity` to `decimals` places without ever rounding up.
pub fn round_down(quantity: Decimal, decimals: u32) -> Decimal {
    quantity.round_dp_with_strategy(decimals, RoundingStrategy::ToZero)
}

/// A BUY limit may not sit above the market, a SELL limit not below it.
pub fn check_limit_price(side: OrderSide, limit: Decimal, market: Decimal) -> Result<(), AccountError> {
    if limit <= Decimal::ZERO {
        return Err(AccountError::NonPositivePrice(limit));
    }
    match side {
        OrderSide::Buy if limit > market => Err(AccountError::LimitAboveMarket { limit, market }),
        OrderSide::Sell if limit < market => Err(AccountError::LimitBelowMarket { limit, market }),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderKind {
    Market,
    Limit(Decimal),
}

/// A sized order together with the balance it was sized from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPlan {
    pub symbol: SymbolInfo,
    pub order: OrderRequest,
    pub funds_asset: String,
    pub available: Decimal,
    /// Average price the order was checked or sized against.
    pub market_price: Decimal,
}

/// Size an order from the free balance of the asset being spent.
///
/// BUY orders convert the quote balance at the limit price (or the market
/// price for market orders); SELL orders sell the whole base balance.
pub fn plan_order(
    info: &SymbolInfo,
    side: OrderSide,
    kind: OrderKind,
    available: Decimal,
    market_price: Decimal,
) -> Result<OrderPlan, AccountError> {
    let step_size = info
        .step_size
        .ok_or_else(|| AccountError::MissingLotSize(info.symbol.clone()))?;
    let decimals = step_decimals(step_size);

    if let OrderKind::Limit(limit) = kind {
        check_limit_price(side, limit, market_price)?;
    }

    let (funds_asset, raw_quantity) = match side {
        OrderSide::Buy => {
            let price = match kind {
                OrderKind::Market => market_price,
                OrderKind::Limit(limit) => limit,
            };
            if price <= Decimal::ZERO {
                return Err(AccountError::NonPositivePrice(price));
            }
            (info.quote_asset.clone(), available / price)
        }
        OrderSide::Sell => (info.base_asset.clone(), available),
    };

    let quantity = round_down(raw_quantity, decimals);
    if quantity <= Decimal::ZERO {
        return Err(AccountError::ZeroQuantity {
            asset: funds_asset,
            available,
        });
    }

    let order = match kind {
        OrderKind::Market => OrderRequest::market(info.symbol.clone(), side, quantity),
        OrderKind::Limit(limit) => OrderRequest::limit(info.symbol.clone(), side, quantity, limit),
    };

    Ok(OrderPlan {
        symbol: info.clone(),
        order,
        funds_asset,
        available,
        market_price,
    })
}

/// Look up symbol rules, price and balance, then size the order.
pub async fn prepare_order(
    client: &BinanceClient,
    symbol: &str,
    side: OrderSide,
    kind: OrderKind,
) -> Result<OrderPlan, Error> {
    let info = client.symbol_info(symbol).await?;
    let market_price = client.avg_price(symbol).await?.price;
    let funds_asset = match side {
        OrderSide::Buy => &info.quote_asset,
        OrderSide::Sell => &info.base_asset,
    };
    let available = client.free_balance(funds_asset).await?;

    let plan = plan_order(&info, side, kind, available, market_price)?;
    info!(
        symbol,
        side = %side,
        quantity = %plan.order.quantity,
        funds = %plan.funds_asset,
        "Prepared order"
    );
    Ok(plan)
}

/// Submit a prepared order and return the exchange acknowledgement.
pub async fn submit_order(client: &BinanceClient, plan: &OrderPlan) -> Result<serde_json::Value, Error> {
    let ack = client.place_order(&plan.order).await?;
    info!(symbol = %plan.order.symbol, side = %plan.order.side, "Order placed");
    Ok(ack)
}
