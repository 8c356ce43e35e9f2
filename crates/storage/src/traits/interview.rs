use async_trait::async_trait;
use interview_ingest_core::{Interview, InterviewUpdate};

use crate::error::StorageError;
use crate::types::UpsertOutcome;

/// Persistence of interviews keyed by the platform's call id.
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Insert `interview`, or, when a row with the same `call_id` exists,
    /// overwrite only its mutable fields.
    ///
    /// This is one atomic store operation: two concurrent first writes for
    /// the same call id end with one row, the later one reported as
    /// `Updated`. `id`, `participant_id` and `created_at` of an existing row
    /// are never touched; extracted variables are only replaced when
    /// `interview` carries them.
    async fn upsert_interview(
        &self,
        interview: &Interview,
    ) -> Result<UpsertOutcome, StorageError>;

    /// Overwrite the mutable fields of an existing row.
    /// Returns `false` when no row has this call id.
    async fn update_interview(
        &self,
        call_id: &str,
        update: &InterviewUpdate,
    ) -> Result<bool, StorageError>;

    /// Point lookup by call id.
    async fn get_interview_by_call_id(
        &self,
        call_id: &str,
    ) -> Result<Option<Interview>, StorageError>;

    /// Every interview, newest first.
    async fn get_all_interviews(&self) -> Result<Vec<Interview>, StorageError>;

    /// Number of stored interviews.
    async fn count_interviews(&self) -> Result<u64, StorageError>;
}
