//! Daily price series and date-range filtering.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::error::StockChartError;

/// One upstream record. Prices arrive as text and are parsed during filtering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPoint {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
}

impl RawPoint {
    pub fn new(open: &str, high: &str, low: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            high: high.to_string(),
            low: low.to_string(),
            close: close.to_string(),
        }
    }
}

/// Date-keyed series as returned by the market data API. Keys are
/// `YYYY-MM-DD` strings, so map order is chronological.
pub type RawSeries = BTreeMap<String, RawPoint>;

/// Inclusive date window. `begin` is strictly before `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    begin: String,
    end: String,
}

impl DateRange {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Result<Self, StockChartError> {
        let begin = begin.into();
        let end = end.into();
        if begin >= end {
            return Err(StockChartError::InvalidDateRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn contains(&self, date: &str) -> bool {
        self.begin.as_str() <= date && date <= self.end.as_str()
    }
}

/// Aligned price columns sharing one date index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSeries {
    pub dates: Vec<String>,
    pub close: Vec<f64>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
}

impl FilteredSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

fn parse_price(date: &str, field: &'static str, value: &str) -> Result<f64, StockChartError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StockChartError::DataFormat {
            date: date.to_string(),
            field,
            value: value.to_string(),
        })
}

/// Keep the points with `range.begin() <= date <= range.end()`.
pub fn filter(series: &RawSeries, range: &DateRange) -> Result<FilteredSeries, StockChartError> {
    let mut out = FilteredSeries::default();

    for (date, point) in series.range(range.begin().to_string()..=range.end().to_string()) {
        out.close.push(parse_price(date, "close", &point.close)?);
        out.open.push(parse_price(date, "open", &point.open)?);
        out.high.push(parse_price(date, "high", &point.high)?);
        out.low.push(parse_price(date, "low", &point.low)?);
        out.dates.push(date.clone());
    }

    Ok(out)
}
