use chrono::Utc;
use reqwest::{header, Client, Method, Response, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::error::ExchangeError;
use super::messages::{
    parse_kline, AccountResponse, AvgPriceResponse, ErrorResponse, ExchangeInfoResponse,
    KlineRow, TickerPrice, TradeEntry,
};
use super::signer::{RequestSigner, API_KEY_HEADER};
use crate::config::Config;
use crate::models::account::{
    AccountBalance, AvgPrice, OrderRequest, SymbolInfo, SymbolPrice, Trade,
};
use crate::models::candle::Candle;

/// Rows returned by `/api/v3/klines` when no limit is given.
pub const DEFAULT_KLINE_LIMIT: u16 = 500;
pub const MAX_KLINE_LIMIT: u16 = 1000;

/// Intervals accepted by `/api/v3/klines`.
pub const KLINE_INTERVALS: &[&str] = &[
    "1s", "1m", "3m", "5m", "15m", "30m", "1h", "2h", "4h", "6h", "8h", "12h", "1d", "3d", "1w",
    "1M",
];

const KLINES_PATH: &str = "/api/v3/klines";
const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";
const AVG_PRICE_PATH: &str = "/api/v3/avgPrice";
const EXCHANGE_INFO_PATH: &str = "/api/v3/exchangeInfo";
const ACCOUNT_PATH: &str = "/api/v3/account";
const MY_TRADES_PATH: &str = "/api/v3/myTrades";
const ORDER_PATH: &str = "/api/v3/order";

type Params = Vec<(&'static str, String)>;

/// Thin async client over the spot REST endpoints the tools use.
#[derive(Debug, Clone)]
pub struct BinanceClient {
    http: Client,
    base_url: Url,
    signer: Option<RequestSigner>,
    recv_window_ms: u64,
}

impl BinanceClient {
    pub fn new(config: &Config) -> Result<Self, ExchangeError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(config, http))
    }

    /// Use a caller-provided HTTP client (tests point this at a mock server).
    pub fn with_client(config: &Config, http: Client) -> Self {
        Self {
            http,
            base_url: config.api_url.clone(),
            signer: config.credentials.as_ref().map(RequestSigner::new),
            recv_window_ms: config.recv_window_ms,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    /// Historical candles, oldest first.
    pub async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<Candle>, ExchangeError> {
        if !KLINE_INTERVALS.contains(&interval) {
            return Err(ExchangeError::InvalidRequest(format!(
                "unsupported interval '{}', expected one of {}",
                interval,
                KLINE_INTERVALS.join(", ")
            )));
        }
        if limit == 0 || limit > MAX_KLINE_LIMIT {
            return Err(ExchangeError::InvalidRequest(format!(
                "kline limit must be within 1..={}, got {}",
                MAX_KLINE_LIMIT, limit
            )));
        }

        let rows: Vec<KlineRow> = self
            .get_public(
                KLINES_PATH,
                vec![
                    ("symbol", symbol.to_string()),
                    ("interval", interval.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        let candles = rows
            .iter()
            .map(|row| parse_kline(row))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(symbol, interval, count = candles.len(), "Fetched klines");
        Ok(candles)
    }

    /// Latest price of every listed symbol.
    pub async fn ticker_prices(&self) -> Result<Vec<SymbolPrice>, ExchangeError> {
        let tickers: Vec<TickerPrice> = self.get_public(TICKER_PRICE_PATH, Vec::new()).await?;
        Ok(tickers.into_iter().map(SymbolPrice::from).collect())
    }

    /// Latest trade price of one symbol.
    pub async fn ticker_price(&self, symbol: &str) -> Result<SymbolPrice, ExchangeError> {
        let ticker: TickerPrice = self
            .get_public(TICKER_PRICE_PATH, vec![("symbol", symbol.to_string())])
            .await?;
        Ok(ticker.into())
    }

    pub async fn avg_price(&self, symbol: &str) -> Result<AvgPrice, ExchangeError> {
        let avg: AvgPriceResponse = self
            .get_public(AVG_PRICE_PATH, vec![("symbol", symbol.to_string())])
            .await?;
        Ok(avg.into())
    }

    pub async fn symbol_info(&self, symbol: &str) -> Result<SymbolInfo, ExchangeError> {
        let info: ExchangeInfoResponse = self
            .get_public(EXCHANGE_INFO_PATH, vec![("symbol", symbol.to_string())])
            .await?;
        info.symbols
            .into_iter()
            .find(|entry| entry.symbol == symbol)
            .map(SymbolInfo::from)
            .ok_or_else(|| ExchangeError::UnknownSymbol(symbol.to_string()))
    }

    pub async fn account_balances(&self) -> Result<Vec<AccountBalance>, ExchangeError> {
        let account: AccountResponse = self
            .send_signed(Method::GET, ACCOUNT_PATH, Vec::new())
            .await?;
        Ok(account.balances.into_iter().map(AccountBalance::from).collect())
    }

    /// Free (unlocked) balance of one asset; zero when the account holds none.
    pub async fn free_balance(&self, asset: &str) -> Result<Decimal, ExchangeError> {
        let balances = self.account_balances().await?;
        Ok(balances
            .into_iter()
            .find(|b| b.asset == asset)
            .map(|b| b.free)
            .unwrap_or(Decimal::ZERO))
    }

    /// Most recent fill of the account on `symbol`.
    pub async fn last_trade(&self, symbol: &str) -> Result<Option<Trade>, ExchangeError> {
        let trades: Vec<TradeEntry> = self
            .send_signed(
                Method::GET,
                MY_TRADES_PATH,
                vec![("symbol", symbol.to_string()), ("limit", "1".to_string())],
            )
            .await?;
        trades
            .into_iter()
            .max_by_key(|t| t.time)
            .map(Trade::try_from)
            .transpose()
    }

    /// Submit a new order and return the exchange's acknowledgement verbatim.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<Value, ExchangeError> {
        if order.quantity <= Decimal::ZERO {
            return Err(ExchangeError::InvalidRequest(format!(
                "order quantity must be positive, got {}",
                order.quantity
            )));
        }
        self.send_signed(Method::POST, ORDER_PATH, order.to_params())
            .await
    }

    async fn get_public<T>(&self, path: &str, params: Params) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base_url.join(path)?;
        if !params.is_empty() {
            url.set_query(Some(&encode(&params)?));
        }

        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Self::parse_response(response).await
    }

    async fn send_signed<T>(
        &self,
        method: Method,
        path: &'static str,
        mut params: Params,
    ) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        let signer = self
            .signer
            .as_ref()
            .ok_or(ExchangeError::MissingCredentials(path))?;

        params.push(("recvWindow", self.recv_window_ms.to_string()));
        params.push(("timestamp", Utc::now().timestamp_millis().to_string()));
        let query = encode(&params)?;
        let signature = signer.sign(&query);

        let mut url = self.base_url.join(path)?;
        url.set_query(Some(&format!("{}&signature={}", query, signature)));

        debug!(%method, path, "Signed request");
        let response = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, signer.api_key())
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T>(response: Response) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::IM_A_TEAPOT {
            let retry_after_secs = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok());
            warn!(status = status.as_u16(), ?retry_after_secs, "Rate limited");
            return Err(ExchangeError::RateLimited {
                status: status.as_u16(),
                retry_after_secs,
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => ExchangeError::Api {
                    status: status.as_u16(),
                    code: err.code,
                    msg: err.msg,
                },
                Err(_) => ExchangeError::Http {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| ExchangeError::Decode(e.to_string()))
    }
}

fn encode(params: &Params) -> Result<String, ExchangeError> {
    serde_urlencoded::to_string(params)
        .map_err(|e| ExchangeError::InvalidRequest(e.to_string()))
}
