//! Route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::state::AppState;

/// Creates the router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/meta", get(handlers::get_meta))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
