//! Unit tests for exit codes

use rust_decimal_macros::dec;
use tradekit::account::AccountError;
use tradekit::config::ConfigError;
use tradekit::indicators::IndicatorError;
use tradekit::services::ExchangeError;
use tradekit::Error;

#[test]
fn test_exit_codes() {
    let insufficient = Error::from(IndicatorError::InsufficientData {
        indicator: "RSI",
        required: 8,
        available: 3,
    });
    assert_eq!(insufficient.exit_code(), 3);
    assert_eq!(
        Error::from(IndicatorError::invalid("MACD", "bad")).exit_code(),
        2
    );
    assert_eq!(Error::from(ConfigError::Missing("BINANCE_API_KEY")).exit_code(), 2);
    assert_eq!(
        Error::from(ExchangeError::RateLimited {
            status: 429,
            retry_after_secs: Some(10),
        })
        .exit_code(),
        4
    );
    assert_eq!(
        Error::from(AccountError::NonPositivePrice(dec!(0))).exit_code(),
        1
    );
}

#[test]
fn test_messages_pass_through() {
    let err = Error::from(ExchangeError::RateLimited {
        status: 429,
        retry_after_secs: Some(10),
    });
    assert_eq!(
        err.to_string(),
        "rate limited by the exchange (HTTP 429), retry after 10s"
    );

    let err = Error::from(AccountError::LimitAboveMarket {
        limit: dec!(101),
        market: dec!(100),
    });
    assert_eq!(
        err.to_string(),
        "BUY limit price (101) is higher than the current market price (100)"
    );
}
