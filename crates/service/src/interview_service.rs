use std::sync::Arc;

use chrono::Utc;
use interview_ingest_core::webhook::{SignatureVerifier, WebhookEvent, parse_webhook};
use interview_ingest_core::{Interview, InterviewUpdate};
use interview_ingest_storage::{InterviewStore, UpsertOutcome};

use crate::error::ServiceError;
use crate::participant::ParticipantIdAllocator;

/// What a processed notification did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// `call_started`: acknowledged, nothing written.
    Ignored,
    Created,
    Updated,
}

impl RecordOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }

    pub fn is_write(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl From<UpsertOutcome> for RecordOutcome {
    fn from(outcome: UpsertOutcome) -> Self {
        match outcome {
            UpsertOutcome::Created => Self::Created,
            UpsertOutcome::Updated => Self::Updated,
        }
    }
}

/// Write path for call-lifecycle notifications: verify, validate, derive,
/// upsert.
pub struct InterviewService {
    store: Arc<dyn InterviewStore>,
    allocator: Box<dyn ParticipantIdAllocator>,
    verifier: SignatureVerifier,
}

impl InterviewService {
    #[must_use]
    pub fn new(
        store: Arc<dyn InterviewStore>,
        allocator: Box<dyn ParticipantIdAllocator>,
        verifier: SignatureVerifier,
    ) -> Self {
        Self { store, allocator, verifier }
    }

    pub fn has_secret(&self) -> bool {
        self.verifier.has_secret()
    }

    /// Authenticates the raw body, then parses and records it.
    ///
    /// The signature is checked before the body is parsed; an unsigned body
    /// never reaches the validator or the store.
    pub async fn ingest(
        &self,
        body: &[u8],
        signature: Option<&str>,
    ) -> Result<RecordOutcome, ServiceError> {
        if !self.verifier.verify(body, signature) {
            tracing::warn!(has_signature = signature.is_some(), "Rejected webhook: bad signature");
            return Err(ServiceError::Unauthorized);
        }

        let event = parse_webhook(body).map_err(|e| {
            tracing::warn!(error = %e, "Rejected webhook: invalid payload");
            e
        })?;
        self.record_call(&event).await
    }

    /// Applies one validated notification to the store.
    ///
    /// `call_started` is acknowledged without a write. Any other event leaves
    /// exactly one record for the call id, carrying this event's transcript,
    /// duration and status.
    pub async fn record_call(&self, event: &WebhookEvent) -> Result<RecordOutcome, ServiceError> {
        let call = &event.call;
        if !event.event.is_persisted() {
            tracing::debug!(call_id = %call.call_id, event = event.event.as_str(), "Call started");
            return Ok(RecordOutcome::Ignored);
        }

        let update = InterviewUpdate {
            transcript: call.transcript_messages(),
            duration: clamp_duration(&call.call_id, call.duration()),
            completion_status: call.completion_status(),
            extracted_variables: call.collected_dynamic_variables.clone(),
        };

        let outcome = match self.store.get_interview_by_call_id(&call.call_id).await? {
            Some(existing) => {
                let mut interview = existing;
                interview.apply(update.clone());
                self.write(&interview, &update).await?
            },
            None => {
                let participant_id = match call.supplied_participant_id() {
                    Some(id) => id,
                    None => self.allocator.allocate(self.store.as_ref()).await?,
                };
                let interview = Interview::from_update(
                    uuid::Uuid::new_v4().to_string(),
                    call.call_id.clone(),
                    Some(participant_id),
                    update.clone(),
                    Utc::now(),
                );
                self.write(&interview, &update).await?
            },
        };

        tracing::info!(
            call_id = %call.call_id,
            event = event.event.as_str(),
            outcome = outcome.as_str(),
            status = %update.completion_status,
            duration_ms = update.duration,
            "Recorded call"
        );
        Ok(outcome)
    }

    /// Conditional write; a unique-key conflict means another writer created
    /// the row first, so the same fields are applied as an update.
    async fn write(
        &self,
        interview: &Interview,
        update: &InterviewUpdate,
    ) -> Result<RecordOutcome, ServiceError> {
        match self.store.upsert_interview(interview).await {
            Ok(outcome) => Ok(outcome.into()),
            Err(e) if e.is_duplicate() => {
                tracing::debug!(call_id = %interview.call_id, "Insert lost race, updating");
                if self.store.update_interview(&interview.call_id, update).await? {
                    Ok(RecordOutcome::Updated)
                } else {
                    Err(e.into())
                }
            },
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_interview(&self, call_id: &str) -> Result<Option<Interview>, ServiceError> {
        Ok(self.store.get_interview_by_call_id(call_id).await?)
    }

    /// All interviews, newest first.
    pub async fn list_interviews(&self) -> Result<Vec<Interview>, ServiceError> {
        Ok(self.store.get_all_interviews().await?)
    }
}

fn clamp_duration(call_id: &str, duration_ms: i64) -> u64 {
    u64::try_from(duration_ms).unwrap_or_else(|_| {
        tracing::warn!(call_id, duration_ms, "Negative call duration, storing 0");
        0
    })
}
