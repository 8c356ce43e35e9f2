use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use interview_ingest_core::constants::SIGNATURE_HEADER;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::MessageResponse;

/// `POST /webhooks/retell`
///
/// Takes the raw body so the signature is computed over exactly the bytes
/// the platform signed.
pub async fn retell_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|value| value.to_str().ok());
    let outcome = state.interview_service.ingest(&body, signature).await?;
    let message = if outcome.is_write() { "Success" } else { "Received" };
    Ok(Json(MessageResponse { message }))
}
