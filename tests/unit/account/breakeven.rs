//! Unit tests for breakeven prices

use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use tradekit::account::{
    breakeven_after_trade, build_breakeven_report, format_elapsed, percentage_difference,
    round_trip_breakeven, AccountError, PriceReport,
};
use tradekit::models::{OrderSide, SymbolInfo, Trade};
use tradekit::reports::{render_breakeven, render_price};

fn sol_btc() -> SymbolInfo {
    SymbolInfo {
        symbol: "SOLBTC".to_string(),
        base_asset: "SOL".to_string(),
        quote_asset: "BTC".to_string(),
        step_size: Some(dec!(0.01)),
    }
}

#[test]
fn test_breakeven_after_buy_and_sell() {
    let fee = dec!(0.001);
    assert_eq!(
        breakeven_after_trade(dec!(100), OrderSide::Buy, fee),
        dec!(100) * dec!(1.001) / dec!(0.999)
    );
    assert_eq!(
        breakeven_after_trade(dec!(100), OrderSide::Sell, fee),
        dec!(100) * dec!(0.999) / dec!(1.001)
    );
    assert!(breakeven_after_trade(dec!(100), OrderSide::Buy, fee) > dec!(100.2));
    assert!(breakeven_after_trade(dec!(100), OrderSide::Sell, fee) < dec!(99.8));
}

#[test]
fn test_round_trip_breakeven() {
    let fee = dec!(0.001);
    assert_eq!(round_trip_breakeven(dec!(200), OrderSide::Buy, fee), dec!(200.4));
    assert_eq!(
        round_trip_breakeven(dec!(200), OrderSide::Sell, fee),
        dec!(200) / dec!(1.002)
    );
}

#[test]
fn test_zero_fee_breakeven_is_price() {
    assert_eq!(
        breakeven_after_trade(dec!(42), OrderSide::Buy, dec!(0)),
        dec!(42)
    );
}

#[test]
fn test_percentage_difference() {
    assert_eq!(percentage_difference(dec!(110), dec!(100)).unwrap(), dec!(10));
    assert_eq!(percentage_difference(dec!(90), dec!(100)).unwrap(), dec!(-10));
    assert!(matches!(
        percentage_difference(dec!(1), dec!(0)),
        Err(AccountError::NonPositivePrice(_))
    ));
}

#[test]
fn test_format_elapsed() {
    let elapsed = Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
    assert_eq!(format_elapsed(elapsed), "2 days, 3 hours, 4 minutes, 5 seconds");
    assert_eq!(format_elapsed(Duration::seconds(-30)), "0 days, 0 hours, 0 minutes, 0 seconds");
}

#[test]
fn test_breakeven_report() {
    let traded_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let trade = Trade {
        symbol: "SOLBTC".to_string(),
        price: dec!(0.002),
        qty: dec!(5),
        is_buyer: true,
        time: traded_at,
    };
    let now = traded_at + Duration::hours(26);

    let report =
        build_breakeven_report(sol_btc(), trade, dec!(0.0021), dec!(0.001), now).unwrap();
    assert_eq!(report.elapsed, "1 days, 2 hours, 0 minutes, 0 seconds");
    assert!(report.difference_pct > dec!(4));

    let text = render_breakeven(&report);
    assert!(text.contains("Last trade price: 0.002 BTC"));
    assert!(text.contains("Last trade quantity: 5 SOL"));
    assert!(text.contains("Last trade side: BUY"));
    assert!(text.contains("Percentage difference to breakeven (if SELL)"));
}

#[test]
fn test_price_report_after_buy_targets_a_sale() {
    let report = PriceReport {
        symbol: sol_btc(),
        side: OrderSide::Buy,
        current_price: dec!(0.002),
        breakeven_price: round_trip_breakeven(dec!(0.002), OrderSide::Buy, dec!(0.001)),
    };
    let text = render_price(&report, dec!(0.001));
    assert!(text.contains("to cover 2x 0.1% trading fees if SOLD is: 0.002004 BTC"));
}

#[test]
fn test_price_report_format() {
    let report = PriceReport {
        symbol: sol_btc(),
        side: OrderSide::Sell,
        current_price: dec!(0.002),
        breakeven_price: round_trip_breakeven(dec!(0.002), OrderSide::Sell, dec!(0.001)),
    };
    let text = render_price(&report, dec!(0.001));
    assert!(text.contains("The current market price of SOLBTC is: 0.002000 BTC"));
    assert!(!text.contains("if SOLD"));
    assert!(text.contains("to cover 2x 0.1% trading fees if BOUGHT back is: 0.001996 BTC"));
}
