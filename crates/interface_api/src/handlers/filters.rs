//! Filter option handlers

use axum::{extract::State, Json};

use crate::dto::filters::FilterOptionsResponse;
use crate::AppState;

/// Lists every hospital and category with the first-visit defaults
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    Json(FilterOptionsResponse::from(state.options.as_ref()))
}
