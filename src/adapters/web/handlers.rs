//! HTTP request handlers for web adapter.

use askama::Template;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use log::info;
use std::sync::Arc;

use crate::domain::request::{ChartRequest, PageView, render_page};

use super::templates::{FormValues, IndexTemplate};
use super::{AppState, WebError, is_htmx_request};

#[derive(Debug, serde::Deserialize)]
pub struct ChartFormData {
    pub stock_symbol: String,
    pub chart_type: String,
    pub time_series_function: String,
    pub begin_date: String,
    pub end_date: String,
}

impl From<ChartFormData> for ChartRequest {
    fn from(form: ChartFormData) -> Self {
        ChartRequest::new(
            form.stock_symbol,
            form.chart_type,
            &form.time_series_function,
            form.begin_date,
            form.end_date,
        )
    }
}

/// The pipeline makes blocking upstream calls, so it runs off the async
/// worker threads.
async fn load_page(
    state: Arc<AppState>,
    submission: Option<ChartRequest>,
) -> Result<PageView, WebError> {
    let view = tokio::task::spawn_blocking(move || {
        render_page(
            state.catalog.as_ref(),
            state.market_data.as_ref(),
            submission.as_ref(),
        )
    })
    .await
    .map_err(|e| WebError::internal(format!("request task failed: {e}")))??;
    Ok(view)
}

fn respond(view: &PageView, form: &FormValues, headers: &HeaderMap) -> Result<Response, WebError> {
    let template = IndexTemplate::new(view, form);

    let html = if is_htmx_request(headers) {
        template.result().render()
    } else {
        template.render()
    }
    .map_err(|e| WebError::internal(format!("template error: {e}")))?;
    Ok(Html(html).into_response())
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let view = load_page(state, None).await?;
    respond(&view, &FormValues::today(), &headers)
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    form: Result<Form<ChartFormData>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form.map_err(|rejection| {
        WebError::new(
            StatusCode::BAD_REQUEST,
            format!("Incomplete chart request: {}", rejection.body_text()),
        )
    })?;
    let request = ChartRequest::from(form);
    info!(
        "chart requested: {} {} {}..{} ({})",
        request.symbol, request.function, request.begin_date, request.end_date, request.chart_type
    );

    let form_values = FormValues::from(&request);
    let view = load_page(state, Some(request)).await?;
    respond(&view, &form_values, &headers)
}

pub async fn not_found() -> WebError {
    WebError::not_found("Page not found")
}
