//! The proxy endpoint.
//!
//! # Responsibilities
//! - Issue one GET to the configured upstream URL
//! - Relay the parsed JSON body back to the caller unmodified
//! - Collapse every failure into one fixed 500 envelope
//!
//! # Design Decisions
//! - Nothing from the inbound request is forwarded: no query string,
//!   headers or body
//! - No timeout and no retry; a slow upstream holds only its own request
//! - The upstream status code is not inspected, so a non-2xx upstream
//!   response with a valid JSON body still passes through as 200

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::server::AppState;

/// Fixed error shape returned on any proxy failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub msg: String,
}

/// Failure of the upstream call.
///
/// Connect errors, read errors and JSON decode errors all land here;
/// callers see a single shape.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UpstreamError(#[from] reqwest::Error);

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Upstream fetch failed");

        let envelope = ErrorEnvelope {
            msg: format!("Internal Server Error: {}", self.0),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
    }
}

/// Handler for `GET /api/data`.
pub async fn fetch_upstream(State(state): State<AppState>) -> Result<Json<Value>, UpstreamError> {
    let response = state.client.get(state.upstream.clone()).send().await?;
    let data = response.json::<Value>().await?;
    Ok(Json(data))
}
