//! Alpha Vantage market data adapter.
//!
//! Calls are blocking and made once, without retries. Callers running inside
//! an async runtime must move them onto a blocking thread.

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::domain::config::ApiConfig;
use crate::domain::error::StockChartError;
use crate::domain::quote::Quote;
use crate::domain::series::RawSeries;
use crate::ports::market_data_port::MarketDataPort;

const SERIES_KEY_MARKER: &str = "Time Series";
const UPSTREAM_MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

pub struct AlphaVantageAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageAdapter {
    pub fn new(config: &ApiConfig) -> Result<Self, StockChartError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("stockchart/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| StockChartError::api(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn get(&self, params: &[(&str, &str)]) -> Result<String, StockChartError> {
        debug!("GET {} {:?}", self.base_url, params);
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    StockChartError::api(format!("request timeout: {}", e.without_url()))
                } else if e.is_connect() {
                    StockChartError::api(format!("connection failed: {}", e.without_url()))
                } else {
                    StockChartError::api(format!("request failed: {}", e.without_url()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StockChartError::api(format!(
                "alphavantage returned status {}",
                status
            )));
        }

        response
            .text()
            .map_err(|e| StockChartError::api(format!("failed to read response body: {}", e.without_url())))
    }
}

impl MarketDataPort for AlphaVantageAdapter {
    fn fetch_series(&self, symbol: &str, function: &str) -> Result<RawSeries, StockChartError> {
        let body = self.get(&[("function", function), ("symbol", symbol)])?;
        parse_series_response(&body).inspect_err(|e| warn!("series {function} for {symbol}: {e}"))
    }

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, StockChartError> {
        let body = self.get(&[("function", "GLOBAL_QUOTE"), ("symbol", symbol)])?;
        parse_quote_response(&body)
    }
}

fn upstream_message(object: &Map<String, Value>) -> Option<&str> {
    UPSTREAM_MESSAGE_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
}

/// Locates the series payload by key name rather than position: the first
/// top-level key mentioning "Time Series" whose value is an object.
pub fn parse_series_response(body: &str) -> Result<RawSeries, StockChartError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| StockChartError::api(format!("failed to parse alphavantage response: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| StockChartError::api("alphavantage response is not a JSON object"))?;

    let series = object
        .iter()
        .find(|(key, value)| key.contains(SERIES_KEY_MARKER) && value.is_object())
        .map(|(_, value)| value);

    match series {
        Some(series) => serde_json::from_value(series.clone())
            .map_err(|e| StockChartError::api(format!("malformed time series payload: {e}"))),
        None => Err(StockChartError::api(match upstream_message(object) {
            Some(message) => format!("alphavantage: {message}"),
            None => "no time series data in response".to_string(),
        })),
    }
}

pub fn parse_quote_response(body: &str) -> Result<Quote, StockChartError> {
    serde_json::from_str(body)
        .map_err(|e| StockChartError::api(format!("failed to parse alphavantage quote: {e}")))
}
