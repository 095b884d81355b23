//! HTTP boundary: routing plus the response assembler.
//!
//! The wire contract mirrors the upstream consumers' expectations: the
//! three patterned engine failures come back as 200 with an error-shaped
//! `result` string, so callers inspect the body text to tell them apart
//! from genuine success. Internally they are a proper tagged
//! [`Category`](crate::classify::Category); only the wire flattens them.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::error::OrchestrateError;
use crate::orchestrator::Orchestrator;
use crate::resolver::AnalysisRequest;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

/// Stable success-shaped payload. All three fields are always present;
/// `networkFile` is empty for the patterned-failure categories.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Raw engine stdout, forwarded for human inspection.
    pub result: String,
    /// Short user-facing message for the classified category.
    pub message: String,
    /// Conventional path of the generated visualization artifact.
    pub network_file: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// POST /api/analyze — run one analysis job and assemble the response.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    match state.orchestrator.handle(&request).await {
        Ok(result) => {
            let body = AnalyzeResponse {
                result: result.raw_output,
                message: result.user_message.to_string(),
                network_file: result.artifact_path.unwrap_or_default(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(OrchestrateError::Resolve(e)) => {
            let body = ErrorResponse {
                error: e.to_string(),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Err(OrchestrateError::Engine(e)) => {
            // Logged in full for operators; the caller only sees a generic
            // message, never stderr or internal traces.
            tracing::error!(error = %e, "analysis job failed");
            let body = ErrorResponse {
                error: "Error executing analysis engine".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
