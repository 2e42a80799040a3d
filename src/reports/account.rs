use rust_decimal::Decimal;
use std::fmt::Write;

use super::SEPARATOR;
use crate::account::{BalanceReport, BreakevenReport, OrderPlan, PriceReport};
use crate::models::account::{OrderSide, OrderType};

pub fn render_balance(report: &BalanceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", SEPARATOR);
    let _ = writeln!(out, "Asset Balances:");
    for line in &report.lines {
        let _ = writeln!(
            out,
            "Asset: {}, Free: {}, Locked: {}, BTC Value: {:.8}",
            line.asset, line.free, line.locked, line.btc_value
        );
    }
    let _ = writeln!(out, "{}", SEPARATOR);
    let _ = writeln!(out, "Total Balance in BTC: {:.8}", report.total_btc);
    let _ = writeln!(
        out,
        "Percentage change from opening balance: {:.2}%",
        report.change_pct
    );
    let _ = writeln!(out, "{}", SEPARATOR);
    out
}

pub fn render_breakeven(report: &BreakevenReport) -> String {
    let quote = &report.symbol.quote_asset;
    let trade = &report.last_trade;
    let closing_side = match trade.side() {
        OrderSide::Buy => OrderSide::Sell,
        OrderSide::Sell => OrderSide::Buy,
    };

    let mut out = String::new();
    let _ = writeln!(out, "Last trade price: {} {}", trade.price, quote);
    let _ = writeln!(
        out,
        "Last trade quantity: {} {}",
        trade.qty, report.symbol.base_asset
    );
    let _ = writeln!(out, "Last trade side: {}", trade.side());
    let _ = writeln!(out, "Current price: {} {}", report.current_price, quote);
    let _ = writeln!(
        out,
        "Breakeven price: {} {}",
        report.breakeven_price.round_dp(8).normalize(),
        quote
    );
    let _ = writeln!(
        out,
        "Percentage difference to breakeven (if {}): {:.2}%",
        closing_side, report.difference_pct
    );
    let _ = writeln!(out, "Time elapsed since last trade: {}", report.elapsed);
    out
}

pub fn render_price(report: &PriceReport, fee_rate: Decimal) -> String {
    let quote = &report.symbol.quote_asset;
    let fee_pct = (fee_rate * Decimal::ONE_HUNDRED).normalize();
    let action = match report.side {
        OrderSide::Buy => "SOLD",
        OrderSide::Sell => "BOUGHT back",
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "The current market price of {} is: {:.6} {}",
        report.symbol.symbol, report.current_price, quote
    );
    let _ = writeln!(
        out,
        "The breakeven price to cover 2x {}% trading fees if {} is: {:.6} {}",
        fee_pct, action, report.breakeven_price, quote
    );
    out
}

/// Funds found and the order about to be placed.
pub fn render_order_plan(plan: &OrderPlan) -> String {
    let order = &plan.order;
    let base = &plan.symbol.base_asset;
    let quote = &plan.symbol.quote_asset;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Getting funds in {} wallet: {} {}",
        plan.funds_asset, plan.available, plan.funds_asset
    );
    match (order.order_type, order.price) {
        (OrderType::Limit, Some(price)) => {
            let _ = writeln!(
                out,
                "Placing {} order for {} {} at {} {}",
                order.side, order.quantity, base, price, quote
            );
        }
        _ => {
            let _ = writeln!(
                out,
                "Placing {} order for {} {}",
                order.side, order.quantity, base
            );
        }
    }
    out
}
