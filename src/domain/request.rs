//! Per-submission pipeline: validate the form, fetch the series, filter it to
//! the requested window and render the chart.
//!
//! Nothing here holds state between calls. Each submission walks
//! `AwaitingInput -> Validating -> Fetching -> Filtering -> Rendering -> Done`,
//! or stops in `Error`.

use std::fmt;

use log::{debug, info};

use crate::domain::chart::{self, ChartStyle, RenderedChart};
use crate::domain::error::StockChartError;
use crate::domain::series::{self, DateRange};
use crate::domain::validator;
use crate::ports::market_data_port::MarketDataPort;
use crate::ports::symbol_port::SymbolCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingInput,
    Validating,
    Fetching,
    Filtering,
    Rendering,
    Done,
    Error,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitingInput => "awaiting-input",
            Stage::Validating => "validating",
            Stage::Fetching => "fetching",
            Stage::Filtering => "filtering",
            Stage::Rendering => "rendering",
            Stage::Done => "done",
            Stage::Error => "error",
        };
        f.write_str(name)
    }
}

/// One form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub symbol: String,
    pub chart_type: String,
    pub function: String,
    pub begin_date: String,
    pub end_date: String,
}

impl ChartRequest {
    /// The symbol is kept exactly as submitted; the series function is
    /// uppercased for the upstream API.
    pub fn new(
        symbol: impl Into<String>,
        chart_type: impl Into<String>,
        function: &str,
        begin_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            chart_type: chart_type.into(),
            function: function.to_uppercase(),
            begin_date: begin_date.into(),
            end_date: end_date.into(),
        }
    }

    pub fn style(&self) -> ChartStyle {
        ChartStyle::from_form(&self.chart_type)
    }
}

/// Everything the index page needs to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub symbols: Vec<String>,
    pub chart: Option<RenderedChart>,
    pub error_message: Option<String>,
}

struct Tracker<'a> {
    symbol: &'a str,
    stage: Stage,
}

impl Tracker<'_> {
    fn enter(&mut self, next: Stage) {
        debug!("{}: {} -> {}", self.symbol, self.stage, next);
        self.stage = next;
    }
}

fn run(
    market: &dyn MarketDataPort,
    request: &ChartRequest,
    tracker: &mut Tracker<'_>,
) -> Result<RenderedChart, StockChartError> {
    tracker.enter(Stage::Validating);
    if !validator::is_valid(market, &request.symbol) {
        return Err(StockChartError::InvalidSymbol {
            symbol: request.symbol.clone(),
        });
    }
    let range = DateRange::new(request.begin_date.as_str(), request.end_date.as_str())?;

    tracker.enter(Stage::Fetching);
    let raw = market.fetch_series(&request.symbol, &request.function)?;

    tracker.enter(Stage::Filtering);
    let filtered = series::filter(&raw, &range)?;

    tracker.enter(Stage::Rendering);
    let title = chart::chart_title(&request.symbol, range.begin(), range.end());
    let rendered = chart::build(&filtered, request.style(), title).render();

    tracker.enter(Stage::Done);
    info!(
        "rendered {} {} chart for {} with {} points",
        request.function,
        request.style(),
        request.symbol,
        filtered.len()
    );
    Ok(rendered)
}

/// Runs the pipeline for one submission.
pub fn build_chart(
    market: &dyn MarketDataPort,
    request: &ChartRequest,
) -> Result<RenderedChart, StockChartError> {
    let mut tracker = Tracker {
        symbol: &request.symbol,
        stage: Stage::AwaitingInput,
    };
    run(market, request, &mut tracker).inspect_err(|e| {
        debug!("{}: {} -> {}: {}", request.symbol, tracker.stage, Stage::Error, e);
    })
}

/// Builds the page for a plain visit (`None`) or a submission. User errors
/// end up in `error_message`; catalog, upstream and data errors are returned.
pub fn render_page(
    catalog: &dyn SymbolCatalog,
    market: &dyn MarketDataPort,
    submission: Option<&ChartRequest>,
) -> Result<PageView, StockChartError> {
    let symbols = catalog.load_symbols()?;

    let Some(request) = submission else {
        return Ok(PageView {
            symbols,
            ..PageView::default()
        });
    };

    match build_chart(market, request) {
        Ok(chart) => Ok(PageView {
            symbols,
            chart: Some(chart),
            error_message: None,
        }),
        Err(e) if e.is_user_error() => Ok(PageView {
            symbols,
            chart: None,
            error_message: Some(e.to_string()),
        }),
        Err(e) => Err(e),
    }
}
