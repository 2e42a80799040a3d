use thiserror::Error;

/// Failures talking to the exchange. Propagated to the caller untouched.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Transport failure: connection, timeout, TLS, or an unreadable body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error(
        "rate limited by the exchange (HTTP {status}){}",
        .retry_after_secs.map(|s| format!(", retry after {}s", s)).unwrap_or_default()
    )]
    RateLimited {
        status: u16,
        retry_after_secs: Option<u64>,
    },

    /// The exchange answered with its `{code, msg}` error body.
    #[error("exchange rejected the request (HTTP {status}, code {code}): {msg}")]
    Api { status: u16, code: i64, msg: String },

    /// Non-success status without a recognisable error body.
    #[error("unexpected HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unknown symbol {0}")]
    UnknownSymbol(String),

    #[error("{0} is a signed endpoint and needs BINANCE_API_KEY and BINANCE_API_SECRET")]
    MissingCredentials(&'static str),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

impl ExchangeError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ExchangeError::RateLimited { .. })
    }
}
