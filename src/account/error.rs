use rust_decimal::Decimal;
use thiserror::Error;

/// Requests the account tools refuse before anything reaches the exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("BUY limit price ({limit}) is higher than the current market price ({market})")]
    LimitAboveMarket { limit: Decimal, market: Decimal },

    #[error("SELL limit price ({limit}) is lower than the current market price ({market})")]
    LimitBelowMarket { limit: Decimal, market: Decimal },

    #[error("{0} has no LOT_SIZE filter")]
    MissingLotSize(String),

    #[error("available {asset} ({available}) rounds down to a zero quantity")]
    ZeroQuantity { asset: String, available: Decimal },

    #[error("no price available for {0}")]
    MissingPrice(String),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("opening balance must be positive, got {0}")]
    InvalidOpeningBalance(Decimal),

    #[error("no last trade found for {0}")]
    NoTrades(String),
}
