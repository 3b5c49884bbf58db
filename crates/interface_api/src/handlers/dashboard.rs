//! Dashboard handlers

use axum::{extract::State, response::Html, Json};
use tracing::debug;

use domain_claims::render;

use super::{resolve_filter, FilterPairs};
use crate::dto::claims::TableResponse;
use crate::dto::dashboard::DashboardResponse;
use crate::views::page::dashboard_page;
use crate::{error::ApiError, AppState};

/// Renders the dashboard page for the selection in the query string
pub async fn show_dashboard(
    State(state): State<AppState>,
    query: FilterPairs,
) -> Result<Html<String>, ApiError> {
    let filter = resolve_filter(&state, query)?;
    let view = render(&state.dataset, &filter);
    let table = TableResponse::from_view(&state.dataset, &view.rows);

    let html = dashboard_page(&state.options, &view, &table)?;
    debug!(bytes = html.len(), "Dashboard page rendered");

    Ok(Html(html))
}

/// Returns the dashboard view model as JSON
pub async fn get_dashboard(
    State(state): State<AppState>,
    query: FilterPairs,
) -> Result<Json<DashboardResponse>, ApiError> {
    let filter = resolve_filter(&state, query)?;
    let view = render(&state.dataset, &filter);

    Ok(Json(DashboardResponse::new(&state.dataset, &view)))
}
