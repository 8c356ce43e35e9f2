//! The interview record and its transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CompletionStatus, ExtractedVariables};

/// Speaker of a transcript turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The platform's voice agent.
    Agent,
    /// The person being interviewed.
    User,
}

/// One turn of a call transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub role: Role,
    pub content: String,
}

impl TranscriptMessage {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    #[must_use]
    pub fn agent(content: impl Into<String>) -> Self {
        Self::new(Role::Agent, content)
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Persisted interview, one per external call.
///
/// `id`, `call_id`, `participant_id` and `created_at` are fixed at creation.
/// Everything in [`InterviewUpdate`] is overwritten by later notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interview {
    pub id: String,
    pub call_id: String,
    pub participant_id: Option<String>,
    pub transcript: Vec<TranscriptMessage>,
    pub extracted_variables: Option<ExtractedVariables>,
    /// Call length in milliseconds.
    pub duration: u64,
    pub completion_status: CompletionStatus,
    pub created_at: DateTime<Utc>,
}

impl Interview {
    /// Builds a brand-new record from the derived fields of a notification.
    #[must_use]
    pub fn from_update(
        id: String,
        call_id: String,
        participant_id: Option<String>,
        update: InterviewUpdate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            call_id,
            participant_id,
            transcript: update.transcript,
            extracted_variables: update.extracted_variables,
            duration: update.duration,
            completion_status: update.completion_status,
            created_at,
        }
    }

    /// Overwrites the mutable fields in place.
    ///
    /// Extracted variables are only replaced when the update carries them.
    pub fn apply(&mut self, update: InterviewUpdate) {
        self.transcript = update.transcript;
        self.duration = update.duration;
        self.completion_status = update.completion_status;
        if update.extracted_variables.is_some() {
            self.extracted_variables = update.extracted_variables;
        }
    }

    /// The mutable part of this record, as it would be written by an update.
    #[must_use]
    pub fn to_update(&self) -> InterviewUpdate {
        InterviewUpdate {
            transcript: self.transcript.clone(),
            duration: self.duration,
            completion_status: self.completion_status.clone(),
            extracted_variables: self.extracted_variables.clone(),
        }
    }
}

/// Fields re-derived from every non-start notification.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewUpdate {
    pub transcript: Vec<TranscriptMessage>,
    pub duration: u64,
    pub completion_status: CompletionStatus,
    pub extracted_variables: Option<ExtractedVariables>,
}
