//! Domain error types.

pub const INVALID_SYMBOL_MESSAGE: &str = "Invalid stock symbol. Please try a different one.";
pub const INVALID_DATE_RANGE_MESSAGE: &str = "The start date must be before the end date.";

/// Top-level error type for stockchart.
#[derive(Debug, thiserror::Error)]
pub enum StockChartError {
    #[error("failed to load symbol catalog {path}: {reason}")]
    CatalogLoad { path: String, reason: String },

    #[error("market data api error: {reason}")]
    Api { reason: String },

    #[error("malformed {field} value {value:?} on {date}")]
    DataFormat {
        date: String,
        field: &'static str,
        value: String,
    },

    #[error("{}", INVALID_SYMBOL_MESSAGE)]
    InvalidSymbol { symbol: String },

    #[error("{}", INVALID_DATE_RANGE_MESSAGE)]
    InvalidDateRange { begin: String, end: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StockChartError {
    pub fn api(reason: impl Into<String>) -> Self {
        Self::Api {
            reason: reason.into(),
        }
    }

    /// Errors caused by what the user submitted. These are reported back on
    /// the form rather than as a failure page.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StockChartError::InvalidSymbol { .. } | StockChartError::InvalidDateRange { .. }
        )
    }
}

impl From<&StockChartError> for std::process::ExitCode {
    fn from(err: &StockChartError) -> Self {
        let code: u8 = match err {
            StockChartError::Io(_) => 1,
            StockChartError::ConfigParse { .. }
            | StockChartError::ConfigMissing { .. }
            | StockChartError::ConfigInvalid { .. } => 2,
            StockChartError::CatalogLoad { .. } => 3,
            StockChartError::Api { .. } => 4,
            StockChartError::DataFormat { .. } => 5,
            StockChartError::InvalidSymbol { .. } | StockChartError::InvalidDateRange { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}
