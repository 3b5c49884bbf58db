//! Claims handlers

use axum::{extract::State, Json};

use super::{resolve_filter, FilterPairs};
use crate::dto::claims::{ClaimsResponse, TableResponse};
use crate::dto::filters::AppliedFilter;
use crate::{error::ApiError, AppState};

/// Lists the claims matching the selection
pub async fn list_claims(
    State(state): State<AppState>,
    query: FilterPairs,
) -> Result<Json<ClaimsResponse>, ApiError> {
    let filter = resolve_filter(&state, query)?;
    let rows = filter.apply(&state.dataset);

    Ok(Json(ClaimsResponse {
        filter: AppliedFilter::from(&filter),
        total: rows.len(),
        table: TableResponse::from_view(&state.dataset, &rows),
    }))
}
