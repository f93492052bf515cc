//! Route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::fetch_meta::{fetch_meta, MetaRecord};
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct MetaQuery {
    url: String,
}

/// GET /meta?url=<urlencoded-url>
pub async fn get_meta(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MetaQuery>,
) -> Result<Json<MetaRecord>, FetchError> {
    let record = fetch_meta(&state.client, &state.cache, &query.url).await?;
    Ok(Json(record))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
