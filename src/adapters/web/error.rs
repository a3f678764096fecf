//! HTTP error responses for web adapter.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;

use crate::domain::error::StockChartError;

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

pub fn status_from_error(err: &StockChartError) -> StatusCode {
    match err {
        StockChartError::InvalidSymbol { .. } | StockChartError::InvalidDateRange { .. } => {
            StatusCode::BAD_REQUEST
        }
        StockChartError::Api { .. } => StatusCode::BAD_GATEWAY,
        StockChartError::CatalogLoad { .. }
        | StockChartError::DataFormat { .. }
        | StockChartError::ConfigParse { .. }
        | StockChartError::ConfigMissing { .. }
        | StockChartError::ConfigInvalid { .. }
        | StockChartError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message shown to the user. Details of system failures stay in the log.
fn public_message(err: &StockChartError) -> String {
    match err {
        StockChartError::InvalidSymbol { .. } | StockChartError::InvalidDateRange { .. } => {
            err.to_string()
        }
        StockChartError::Api { .. } => {
            "The market data service is unavailable. Please try again later.".to_string()
        }
        StockChartError::DataFormat { .. } => {
            "The market data service returned prices that could not be read.".to_string()
        }
        StockChartError::CatalogLoad { .. } => {
            "The list of stock symbols could not be loaded.".to_string()
        }
        _ => "Something went wrong while handling your request.".to_string(),
    }
}

impl From<StockChartError> for WebError {
    fn from(err: StockChartError) -> Self {
        let status = status_from_error(&err);
        if status.is_server_error() {
            error!("request failed: {err}");
        }
        Self::new(status, public_message(&err))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let template = super::templates::ErrorTemplate {
            message: &self.message,
            status: self.status.as_u16(),
        };
        match template.render() {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(_) => (self.status, self.message).into_response(),
        }
    }
}
