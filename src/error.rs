use thiserror::Error;

use crate::account::AccountError;
use crate::config::ConfigError;
use crate::indicators::IndicatorError;
use crate::services::binance::ExchangeError;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure a tool can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Account(#[from] AccountError),
}

impl Error {
    /// Process exit status for this failure.
    ///
    /// 1 rejected account request, 2 bad input or configuration,
    /// 3 not enough candles, 4 exchange failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Indicator(IndicatorError::InsufficientData { .. }) => 3,
            Error::Indicator(IndicatorError::InvalidParameter { .. }) => 2,
            Error::Exchange(ExchangeError::InvalidRequest(_)) => 2,
            Error::Exchange(_) => 4,
            Error::Config(_) => 2,
            Error::Account(_) => 1,
        }
    }
}
