//! Chart specification built from a filtered series.

use std::fmt;

use crate::domain::series::FilteredSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    Line,
    Bar,
}

impl ChartStyle {
    /// Only the exact value `"line"` selects a line chart; everything else
    /// falls back to grouped bars.
    pub fn from_form(value: &str) -> Self {
        match value {
            "line" => ChartStyle::Line,
            _ => ChartStyle::Bar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartStyle::Line => "line",
            ChartStyle::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub style: ChartStyle,
    pub title: String,
    pub dates: Vec<String>,
    pub traces: Vec<Trace>,
}

/// Serialized chart markup, safe to embed in a page as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart(pub String);

impl RenderedChart {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn chart_title(symbol: &str, begin: &str, end: &str) -> String {
    format!("Stock Prices for {symbol} from {begin} to {end}")
}

/// Four traces in fixed order: Close, Open, High, Low.
pub fn build(filtered: &FilteredSeries, style: ChartStyle, title: impl Into<String>) -> ChartSpec {
    let traces = vec![
        Trace {
            name: "Close",
            color: "#1f77b4",
            values: filtered.close.clone(),
        },
        Trace {
            name: "Open",
            color: "#ff7f0e",
            values: filtered.open.clone(),
        },
        Trace {
            name: "High",
            color: "#2ca02c",
            values: filtered.high.clone(),
        },
        Trace {
            name: "Low",
            color: "#d62728",
            values: filtered.low.clone(),
        },
    ];

    ChartSpec {
        style,
        title: title.into(),
        dates: filtered.dates.clone(),
        traces,
    }
}

impl ChartSpec {
    pub fn render(&self) -> RenderedChart {
        RenderedChart(crate::domain::chart_svg::render_svg(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> FilteredSeries {
        FilteredSeries {
            dates: vec!["2024-01-01".into(), "2024-01-02".into()],
            close: vec![10.0, 11.0],
            open: vec![9.5, 10.5],
            high: vec![10.5, 11.5],
            low: vec![9.0, 10.0],
        }
    }

    #[test]
    fn line_only_for_exact_value() {
        assert_eq!(ChartStyle::from_form("line"), ChartStyle::Line);
        assert_eq!(ChartStyle::from_form("bar"), ChartStyle::Bar);
        assert_eq!(ChartStyle::from_form("LINE"), ChartStyle::Bar);
        assert_eq!(ChartStyle::from_form(" line"), ChartStyle::Bar);
        assert_eq!(ChartStyle::from_form(""), ChartStyle::Bar);
    }

    #[test]
    fn traces_in_fixed_order() {
        let spec = build(&sample(), ChartStyle::Bar, "t");
        let names: Vec<&str> = spec.traces.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Close", "Open", "High", "Low"]);
        assert_eq!(spec.traces[0].values, vec![10.0, 11.0]);
        assert_eq!(spec.traces[3].values, vec![9.0, 10.0]);
    }

    #[test]
    fn every_trace_spans_full_date_axis() {
        let spec = build(&sample(), ChartStyle::Line, "t");
        for trace in &spec.traces {
            assert_eq!(trace.values.len(), spec.dates.len());
        }
    }

    #[test]
    fn title_embeds_symbol_and_range() {
        assert_eq!(
            chart_title("AAPL", "2024-01-01", "2024-01-05"),
            "Stock Prices for AAPL from 2024-01-01 to 2024-01-05"
        );
    }

    proptest! {
        #[test]
        fn anything_but_line_is_bar(value in "\\PC*") {
            prop_assume!(value != "line");
            prop_assert_eq!(ChartStyle::from_form(&value), ChartStyle::Bar);
        }
    }
}
