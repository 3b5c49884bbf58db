//! Request handlers

pub mod claims;
pub mod dashboard;
pub mod filters;
pub mod health;

use axum::extract::{rejection::QueryRejection, Query};

use domain_claims::ClaimFilter;

use crate::dto::filters::FilterQuery;
use crate::error::ApiError;
use crate::AppState;

/// Raw query pairs, kept as a `Result` so rejections map onto `ApiError`
pub type FilterPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("No such page".to_string())
}

/// Turns the query string into a filter, applying the defaults
fn resolve_filter(state: &AppState, query: FilterPairs) -> Result<ClaimFilter, ApiError> {
    let Query(pairs) = query?;
    Ok(FilterQuery::from_pairs(pairs)?.into_filter(&state.options))
}
