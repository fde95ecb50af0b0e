//! API handlers.
//!
//! All handlers ignore request bodies and query strings. Injected
//! failures are the expected output of a flaky version, so they are
//! logged at debug level only.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::debug;

use crate::ApiState;

/// Body of every injected failure.
pub const INJECTED_FAILURE_BODY: &str = "Internal Server Error";

/// Status reported by `/version`. Not tied to fault injection.
pub const VERSION_STATUS: &str = "healthy";

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WorkResponse {
    pub version: String,
    pub processed: bool,
    pub latency_ms: u64,
}

fn injected_failure(endpoint: &'static str) -> Response {
    debug!(endpoint, "injecting synthetic failure");
    (StatusCode::INTERNAL_SERVER_ERROR, INJECTED_FAILURE_BODY).into_response()
}

// ── Version ────────────────────────────────────────────────────

/// GET /version
pub async fn version(State(state): State<ApiState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.config.version.clone(),
        status: VERSION_STATUS,
    })
}

// ── Health ─────────────────────────────────────────────────────

/// GET /health
pub async fn health(State(state): State<ApiState>) -> Response {
    if state.faults.should_fail() {
        return injected_failure("health");
    }
    (StatusCode::OK, "OK").into_response()
}

// ── Work ───────────────────────────────────────────────────────

/// GET /work
///
/// Sleeps for the configured latency before the fault check, so failed
/// requests cost the same as successful ones.
pub async fn work(State(state): State<ApiState>) -> Response {
    let profile = state.config.profile;
    tokio::time::sleep(profile.latency()).await;

    if state.faults.should_fail() {
        return injected_failure("work");
    }

    Json(WorkResponse {
        version: state.config.version.clone(),
        processed: true,
        latency_ms: profile.latency_ms,
    })
    .into_response()
}
