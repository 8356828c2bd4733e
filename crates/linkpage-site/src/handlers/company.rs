//! Company Profile Endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// Handler for `GET /api/open/data/company`.
///
/// Upstream failures answer `502 Bad Gateway`, anything else `500`; no
/// partial record is sent.
pub async fn company(State(state): State<AppState>) -> Response {
    match state.source().load().await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "company profile unavailable");
            let status = if err.is_upstream() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(json!({ "error": "company profile unavailable" }))).into_response()
        }
    }
}
