//! Runtime configuration read from the environment (and `.env` via dotenvy).
//!
//! Nothing here is global: binaries build a [`Config`] in `main` and hand it
//! to the exchange client.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use secrecy::SecretString;
use std::env;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.binance.com";
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;
/// 0.1% per fill.
pub const DEFAULT_FEE_RATE: Decimal = dec!(0.001);
pub const DEFAULT_OPENING_BALANCE_BTC: Decimal = dec!(0.00130951);
/// Binance rejects receive windows above one minute.
pub const MAX_RECV_WINDOW_MS: u64 = 60_000;

const API_URL_VAR: &str = "BINANCE_API_URL";
const API_KEY_VAR: &str = "BINANCE_API_KEY";
const API_SECRET_VAR: &str = "BINANCE_API_SECRET";
const RECV_WINDOW_VAR: &str = "BINANCE_RECV_WINDOW";
const FEE_RATE_VAR: &str = "TRADING_FEE_RATE";
const OPENING_BALANCE_VAR: &str = "OPENING_BALANCE_BTC";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name}={value:?} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Get the deployment environment name (`APP_ENV`, default `development`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// API key pair for signed endpoints.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: SecretString,
    pub api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_secret: SecretString::from(api_secret.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub credentials: Option<Credentials>,
    pub recv_window_ms: u64,
    /// Fee charged per fill, as a fraction (0.001 = 0.1%).
    pub fee_rate: Decimal,
    /// Reference BTC value the `balance` tool reports change against.
    pub opening_balance_btc: Decimal,
}

impl Config {
    /// Defaults against the given base URL, without credentials.
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            credentials: None,
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            fee_rate: DEFAULT_FEE_RATE,
            opening_balance_btc: DEFAULT_OPENING_BALANCE_BTC,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_url = match get(API_URL_VAR) {
            Some(raw) => Url::parse(&raw).map_err(|e| ConfigError::Invalid {
                name: API_URL_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => Url::parse(DEFAULT_API_URL).map_err(|e| ConfigError::Invalid {
                name: API_URL_VAR,
                value: DEFAULT_API_URL.to_string(),
                reason: e.to_string(),
            })?,
        };

        let mut config = Self::new(api_url);

        config.credentials = match (get(API_KEY_VAR), get(API_SECRET_VAR)) {
            (Some(key), Some(secret)) => Some(Credentials::new(key, secret)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing(API_SECRET_VAR)),
            (None, Some(_)) => return Err(ConfigError::Missing(API_KEY_VAR)),
        };

        if let Some(raw) = get(RECV_WINDOW_VAR) {
            let window: u64 = parse_var(RECV_WINDOW_VAR, &raw)?;
            if window == 0 || window > MAX_RECV_WINDOW_MS {
                return Err(ConfigError::Invalid {
                    name: RECV_WINDOW_VAR,
                    value: raw,
                    reason: format!("must be within 1..={}", MAX_RECV_WINDOW_MS),
                });
            }
            config.recv_window_ms = window;
        }

        if let Some(raw) = get(FEE_RATE_VAR) {
            let fee: Decimal = parse_var(FEE_RATE_VAR, &raw)?;
            if fee < Decimal::ZERO || fee >= Decimal::ONE {
                return Err(ConfigError::Invalid {
                    name: FEE_RATE_VAR,
                    value: raw,
                    reason: "must be a fraction in [0, 1)".to_string(),
                });
            }
            config.fee_rate = fee;
        }

        if let Some(raw) = get(OPENING_BALANCE_VAR) {
            let balance: Decimal = parse_var(OPENING_BALANCE_VAR, &raw)?;
            if balance <= Decimal::ZERO {
                return Err(ConfigError::Invalid {
                    name: OPENING_BALANCE_VAR,
                    value: raw,
                    reason: "must be positive".to_string(),
                });
            }
            config.opening_balance_btc = balance;
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
