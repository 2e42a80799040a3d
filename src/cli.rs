//! Plumbing shared by the command-line tools.

use dotenvy::dotenv;
use rust_decimal::Decimal;
use std::process::ExitCode;
use tracing::error;

use crate::config::Config;
use crate::error::Error;
use crate::logging;
use crate::services::binance::{BinanceClient, KLINE_INTERVALS};

/// Load `.env`, start logging and read the configuration.
pub fn bootstrap() -> Result<Config, Error> {
    dotenv().ok();
    logging::init_logging();
    Ok(Config::from_env()?)
}

/// Bootstrap and build an exchange client in one step.
pub fn connect() -> Result<(Config, BinanceClient), Error> {
    let config = bootstrap()?;
    let client = BinanceClient::new(&config)?;
    Ok((config, client))
}

/// Turn a tool's outcome into its process exit status.
pub fn finish(result: Result<(), Error>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            error!(error = %e, code, "Command failed");
            eprintln!("error: {}", e);
            ExitCode::from(code)
        }
    }
}

/// Trading pairs are accepted in any case (`btcusdt` -> `BTCUSDT`).
pub fn parse_pair(raw: &str) -> Result<String, String> {
    let pair = raw.trim().to_ascii_uppercase();
    if pair.is_empty() || !pair.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("invalid trading pair '{}'", raw));
    }
    Ok(pair)
}

/// Kline interval, checked against the list the exchange accepts.
pub fn parse_interval(raw: &str) -> Result<String, String> {
    if KLINE_INTERVALS.contains(&raw) {
        Ok(raw.to_string())
    } else {
        Err(format!(
            "unsupported interval '{}', expected one of {}",
            raw,
            KLINE_INTERVALS.join(", ")
        ))
    }
}

pub fn parse_positive_decimal(raw: &str) -> Result<Decimal, String> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|e| format!("invalid number '{}': {}", raw, e))?;
    if value <= Decimal::ZERO {
        return Err(format!("'{}' must be greater than zero", raw));
    }
    Ok(value)
}
