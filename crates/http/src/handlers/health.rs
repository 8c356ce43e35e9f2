use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::response_types::HealthResponse;

/// `GET /api/health`: one round-trip to the store, 503 when it fails.
pub async fn api_health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let report = state.analytics_service.health().await;
    let timestamp = report.checked_at.to_rfc3339();
    match report.error {
        None => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "connected",
                timestamp,
                error: None,
            }),
        ),
        Some(error) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                database: "disconnected",
                timestamp,
                error: Some(error),
            }),
        ),
    }
}
