//! HTTP layer for the claims dashboard
//!
//! Serves the dashboard page and a small JSON API over one dataset loaded at
//! start-up, using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: page, dashboard, filters, claims, health
//! - **Views**: server-rendered HTML and inline SVG charts
//! - **DTOs**: JSON response shapes and query parsing
//! - **Middleware**: request id and request logging
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let dataset = DatasetCache::new(&config.data_path).get_or_load()?;
//! let app = create_router(dataset, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod views;

use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{ClaimDataset, FilterOptions};

use crate::config::ApiConfig;
use crate::handlers::{claims, dashboard, filters, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset, read-only for the life of the server
    pub dataset: Arc<ClaimDataset>,
    /// Distinct hospitals and categories, computed once
    pub options: Arc<FilterOptions>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(dataset: Arc<ClaimDataset>, config: ApiConfig) -> Self {
        let options = FilterOptions::from_dataset(&dataset, config.default_hospital_count);
        Self {
            dataset,
            options: Arc::new(options),
            config,
        }
    }
}

/// Creates the dashboard router
///
/// # Arguments
///
/// * `dataset` - The loaded claims dataset
/// * `config` - Server configuration
pub fn create_router(dataset: Arc<ClaimDataset>, config: ApiConfig) -> Router {
    let state = AppState::new(dataset, config);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/filters", get(filters::get_filter_options))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/claims", get(claims::list_claims));

    Router::new()
        .route("/", get(dashboard::show_dashboard))
        .merge(health_routes)
        .nest("/api/v1", api_routes)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(request_logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
