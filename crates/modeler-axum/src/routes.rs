//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AppCore` facade.

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the REST routes without the `/rest` prefix.
///
/// State is inferred from the handlers; the caller applies `.with_state()`
/// before nesting.
pub(crate) fn rest_routes() -> Router<AppState> {
    Router::new()
        .route("/form-models", get(handlers::forms::list))
        .route("/models", get(handlers::models::list_linked))
        .route("/models/count", get(handlers::models::count))
        .route("/models/processes", get(handlers::models::processes))
        .route("/models/{id}", get(handlers::models::get))
        .route("/models/{id}/children", get(handlers::models::children))
        .route("/models/{id}/parents", get(handlers::models::parents))
}

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/rest", rest_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
