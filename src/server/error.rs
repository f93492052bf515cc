//! Maps pipeline errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::error::FetchError;

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            FetchError::InvalidUrl => (StatusCode::BAD_REQUEST, "Invalid URL".to_string()),
            FetchError::Upstream { status } => (
                // Mirror the upstream status; anything outside the
                // representable range degrades to 502.
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Failed to fetch URL".to_string(),
            ),
            FetchError::Fetch(message) => {
                error!(error = %message, "fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error fetching metadata: {}", message),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
