// api.rs
// HTTP surface for the trajectory deviation scorer.
//
// The handlers here are plumbing only: parse two sample sequences,
// run the drift-core pipeline, serialize three scores. All numerical
// decisions live in drift-core.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use drift_core::{fit, project, score, Axis, FitError, Trajectory};

// ============================================================================
// API Types
// ============================================================================

/// Request body: a known-good reference trajectory and a newly
/// observed recent one, each an ordered sequence of `[x, y, z]`.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub reference: Trajectory,
    pub recent: Trajectory,
}

/// Response body: exactly three per-axis error scores, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviationResponse {
    pub error_x: f64,
    pub error_y: f64,
    pub error_z: f64,
}

// ============================================================================
// Endpoints
// ============================================================================

/// POST /api/score
async fn score_deviation(Json(req): Json<ScoreRequest>) -> impl IntoResponse {
    match compute_deviation(&req) {
        Ok(scores) => (StatusCode::CREATED, Json(scores)).into_response(),
        Err(e @ FitError::EmptyReference) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// Full pipeline for one request: fit the reference per axis, then
/// score the recent trajectory against each axis model.
pub fn compute_deviation(req: &ScoreRequest) -> Result<DeviationResponse, FitError> {
    let (fit_x, fit_y, fit_z) = fit(&req.reference)?;

    let scores = DeviationResponse {
        error_x: score(&fit_x, &project(&req.recent, Axis::X)),
        error_y: score(&fit_y, &project(&req.recent, Axis::Y)),
        error_z: score(&fit_z, &project(&req.recent, Axis::Z)),
    };

    debug!(
        reference_len = req.reference.len(),
        recent_len = req.recent.len(),
        error_x = scores.error_x,
        error_y = scores.error_y,
        error_z = scores.error_z,
        "scored trajectory deviation"
    );

    Ok(scores)
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router with permissive CORS. Preflight
/// OPTIONS requests are answered by the CORS layer with an empty body;
/// unsupported methods on a route fall through to 405.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/score", post(score_deviation))
        .layer(cors)
}
