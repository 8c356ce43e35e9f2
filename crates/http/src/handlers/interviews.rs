use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use interview_ingest_core::Interview;
use interview_ingest_core::analytics::Dashboard;

use crate::AppState;
use crate::api_error::ApiError;

pub async fn list_interviews(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Interview>>, ApiError> {
    let interviews = state.interview_service.list_interviews().await?;
    Ok(Json(interviews))
}

pub async fn get_interview(
    State(state): State<Arc<AppState>>,
    Path(call_id): Path<String>,
) -> Result<Json<Interview>, ApiError> {
    state
        .interview_service
        .get_interview(&call_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("interview '{call_id}' not found")))
}

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let dashboard = state.analytics_service.dashboard().await?;
    Ok(Json(dashboard))
}
