//! Typed error enum for the service layer.
//!
//! Callers (the HTTP layer, the CLI) match on the variant to pick a status
//! code or exit message instead of inspecting strings.

use interview_ingest_core::ValidationError;
use interview_ingest_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (unreachable store, corrupt row, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Notification body was not valid JSON or did not match the schema.
    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationError),

    /// Signature header missing, malformed, stale, or wrong.
    #[error("invalid signature")]
    Unauthorized,

    /// Background computation was cancelled or panicked.
    #[error("task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServiceError {
    /// Whether the caller sent something we refuse to process.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Unauthorized)
    }
}
