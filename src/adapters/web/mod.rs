//! Web server adapter.
//!
//! Axum server for the chart form. `GET /` renders the form, `POST /`
//! processes a submission on the same page.

mod error;
mod handlers;
mod templates;

pub use error::WebError;
pub use handlers::*;
pub use templates::*;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::ports::market_data_port::MarketDataPort;
use crate::ports::symbol_port::SymbolCatalog;

pub struct AppState {
    pub catalog: Arc<dyn SymbolCatalog + Send + Sync>,
    pub market_data: Arc<dyn MarketDataPort + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}

fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}
