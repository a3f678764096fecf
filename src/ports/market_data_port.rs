//! Market data port trait.

use crate::domain::error::StockChartError;
use crate::domain::quote::Quote;
use crate::domain::series::RawSeries;

pub trait MarketDataPort {
    /// Full series for `symbol` at the granularity named by `function`
    /// (e.g. `TIME_SERIES_DAILY`).
    fn fetch_series(&self, symbol: &str, function: &str) -> Result<RawSeries, StockChartError>;

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, StockChartError>;
}
