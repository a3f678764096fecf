//! HTML templates using Askama.

use askama::Template;
use chrono::{Days, Local, NaiveDate};

use crate::domain::request::{ChartRequest, PageView};

pub const SERIES_FUNCTIONS: [(&str, &str); 3] = [
    ("TIME_SERIES_DAILY", "Daily"),
    ("TIME_SERIES_WEEKLY", "Weekly"),
    ("TIME_SERIES_MONTHLY", "Monthly"),
];

pub const CHART_TYPES: [(&str, &str); 2] = [("bar", "Bar"), ("line", "Line")];

const DEFAULT_WINDOW_DAYS: u64 = 30;

pub struct SelectOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub selected: bool,
}

/// Values shown in the form inputs, either defaults or the last submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub symbol: String,
    pub chart_type: String,
    pub function: String,
    pub begin_date: String,
    pub end_date: String,
}

impl FormValues {
    pub fn defaults(today: NaiveDate) -> Self {
        let begin = today
            .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
            .unwrap_or(today);
        Self {
            symbol: String::new(),
            chart_type: "bar".to_string(),
            function: SERIES_FUNCTIONS[0].0.to_string(),
            begin_date: begin.format("%Y-%m-%d").to_string(),
            end_date: today.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn today() -> Self {
        Self::defaults(Local::now().date_naive())
    }
}

impl From<&ChartRequest> for FormValues {
    fn from(request: &ChartRequest) -> Self {
        Self {
            symbol: request.symbol.clone(),
            chart_type: request.chart_type.clone(),
            function: request.function.clone(),
            begin_date: request.begin_date.clone(),
            end_date: request.end_date.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub symbols: Vec<SelectOption<'a>>,
    pub chart_types: Vec<SelectOption<'a>>,
    pub functions: Vec<SelectOption<'a>>,
    pub begin_date: &'a str,
    pub end_date: &'a str,
    pub chart: Option<&'a str>,
    pub error_message: Option<&'a str>,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(view: &'a PageView, form: &'a FormValues) -> Self {
        let symbols = view
            .symbols
            .iter()
            .map(|s| SelectOption {
                value: s,
                label: s,
                selected: *s == form.symbol,
            })
            .collect();
        let chart_types = CHART_TYPES
            .iter()
            .map(|&(value, label)| SelectOption {
                value,
                label,
                selected: value == form.chart_type,
            })
            .collect();
        let functions = SERIES_FUNCTIONS
            .iter()
            .map(|&(value, label)| SelectOption {
                value,
                label,
                selected: value == form.function,
            })
            .collect();

        Self {
            symbols,
            chart_types,
            functions,
            begin_date: &form.begin_date,
            end_date: &form.end_date,
            chart: view.chart.as_ref().map(|c| c.as_str()),
            error_message: view.error_message.as_deref(),
        }
    }

    /// Result area only, for HTMX swaps.
    pub fn result(&self) -> ResultTemplate<'a> {
        ResultTemplate {
            chart: self.chart,
            error_message: self.error_message,
        }
    }
}

/// The `#result` block, also included by `index.html`.
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate<'a> {
    pub chart: Option<&'a str>,
    pub error_message: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub status: u16,
}
