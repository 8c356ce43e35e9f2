use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::PARTICIPANT_ID_METADATA_KEY;
use crate::{CompletionStatus, ExtractedVariables, Role, TranscriptMessage};

use super::derive::{resolve_completion_status, resolve_duration};

/// Lifecycle stage a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallEventKind {
    CallStarted,
    CallEnded,
    CallAnalyzed,
}

impl CallEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CallStarted => "call_started",
            Self::CallEnded => "call_ended",
            Self::CallAnalyzed => "call_analyzed",
        }
    }

    /// Call-started notifications are acknowledged but never persisted.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, Self::CallStarted)
    }
}

/// A validated notification body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event: CallEventKind,
    pub call: CallObject,
}

/// The `call` object of a notification.
///
/// Only `metadata` and `collected_dynamic_variables` keep unknown keys;
/// unknown fields anywhere else are dropped during parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallObject {
    pub call_id: String,
    pub agent_id: Option<String>,
    pub call_status: Option<String>,
    pub call_type: Option<String>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
    pub direction: Option<String>,
    /// Unix millis; any JSON number is accepted.
    pub start_timestamp: Option<f64>,
    pub end_timestamp: Option<f64>,
    pub duration_ms: Option<f64>,
    pub transcript: Option<String>,
    pub transcript_object: Option<Vec<TranscriptEntry>>,
    pub disconnection_reason: Option<String>,
    pub call_analysis: Option<CallAnalysis>,
    pub metadata: Option<Map<String, Value>>,
    pub collected_dynamic_variables: Option<ExtractedVariables>,
}

/// One transcript turn as the platform sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    /// Word-level timing; accepted but not persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Value>>,
}

/// Post-call analysis produced by the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallAnalysis {
    pub call_successful: Option<bool>,
}

impl CallObject {
    /// Transcript reduced to role and content, empty when absent.
    #[must_use]
    pub fn transcript_messages(&self) -> Vec<TranscriptMessage> {
        self.transcript_object
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| TranscriptMessage::new(entry.role, entry.content.clone()))
            .collect()
    }

    /// Raw duration in milliseconds; may be negative on bad timestamps.
    pub fn duration(&self) -> i64 {
        resolve_duration(self.start_timestamp, self.end_timestamp, self.duration_ms)
    }

    pub fn completion_status(&self) -> CompletionStatus {
        resolve_completion_status(
            self.call_analysis.as_ref().and_then(|a| a.call_successful),
            self.disconnection_reason.as_deref(),
        )
    }

    /// Participant id passed through call metadata, if any.
    ///
    /// Strings are taken verbatim; other non-null values (numbers, booleans)
    /// use their JSON text. Null and the empty string count as absent.
    pub fn supplied_participant_id(&self) -> Option<String> {
        match self.metadata.as_ref()?.get(PARTICIPANT_ID_METADATA_KEY)? {
            Value::Null => None,
            Value::String(id) if id.is_empty() => None,
            Value::String(id) => Some(id.clone()),
            other => Some(other.to_string()),
        }
    }
}
