#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use stockchart::domain::error::StockChartError;
use stockchart::domain::quote::Quote;
pub use stockchart::domain::series::{RawPoint, RawSeries};
use stockchart::ports::market_data_port::MarketDataPort;
use stockchart::ports::symbol_port::SymbolCatalog;

pub struct MockCatalog {
    pub symbols: Vec<String>,
    pub failure: Option<String>,
}

impl MockCatalog {
    pub fn new(symbols: &[&str]) -> Self {
        Self {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            failure: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            symbols: Vec::new(),
            failure: Some(reason.to_string()),
        }
    }
}

impl SymbolCatalog for MockCatalog {
    fn load_symbols(&self) -> Result<Vec<String>, StockChartError> {
        match &self.failure {
            Some(reason) => Err(StockChartError::CatalogLoad {
                path: "mock.csv".to_string(),
                reason: reason.clone(),
            }),
            None => Ok(self.symbols.clone()),
        }
    }
}

/// Market data double. Failures are stored as reasons and turned into
/// `StockChartError::Api` on each call.
pub struct MockMarketData {
    pub quote: Result<Quote, String>,
    pub series: Result<RawSeries, String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockMarketData {
    /// Accepts every symbol and serves an empty series.
    pub fn new() -> Self {
        Self {
            quote: Ok(valid_quote("AAPL")),
            series: Ok(RawSeries::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_series(mut self, series: RawSeries) -> Self {
        self.series = Ok(series);
        self
    }

    pub fn with_series_error(mut self, reason: &str) -> Self {
        self.series = Err(reason.to_string());
        self
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = Ok(quote);
        self
    }

    pub fn with_quote_error(mut self, reason: &str) -> Self {
        self.quote = Err(reason.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn series_fetched(&self) -> bool {
        self.calls().iter().any(|c| c.starts_with("series:"))
    }
}

impl MarketDataPort for MockMarketData {
    fn fetch_series(&self, symbol: &str, function: &str) -> Result<RawSeries, StockChartError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("series:{symbol}:{function}"));
        self.series.clone().map_err(StockChartError::api)
    }

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, StockChartError> {
        self.calls.lock().unwrap().push(format!("quote:{symbol}"));
        self.quote.clone().map_err(StockChartError::api)
    }
}

pub fn valid_quote(symbol: &str) -> Quote {
    let mut fields = BTreeMap::new();
    fields.insert("01. symbol".to_string(), symbol.to_string());
    fields.insert("05. price".to_string(), "185.6400".to_string());
    Quote {
        error_message: None,
        fields,
    }
}

pub fn error_quote() -> Quote {
    Quote {
        error_message: Some(
            "Invalid API call. Please retry or visit the documentation for GLOBAL_QUOTE."
                .to_string(),
        ),
        fields: BTreeMap::new(),
    }
}

/// One point per date, prices rising by one per day from `start_price`.
pub fn daily_series(dates: &[&str], start_price: f64) -> RawSeries {
    dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let close = start_price + i as f64;
            (
                date.to_string(),
                RawPoint::new(
                    &format!("{:.4}", close - 0.5),
                    &format!("{:.4}", close + 1.0),
                    &format!("{:.4}", close - 1.0),
                    &format!("{:.4}", close),
                ),
            )
        })
        .collect()
}

pub const WEEK_AROUND_NEW_YEAR: [&str; 7] = [
    "2023-12-31",
    "2024-01-01",
    "2024-01-02",
    "2024-01-03",
    "2024-01-04",
    "2024-01-05",
    "2024-01-06",
];
