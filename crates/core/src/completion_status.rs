//! How a call ended.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Completion status of an interview.
///
/// The platform reports arbitrary disconnection reasons, so beyond the
/// statuses this system assigns itself everything lands in `Other`.
/// Persisted and serialized as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompletionStatus {
    /// The platform's post-call analysis marked the call successful.
    Completed,
    /// Record exists but no outcome is known yet.
    Pending,
    /// Call ended without analysis or disconnection reason.
    Ended,
    /// A disconnection reason reported by the platform, e.g. `user_hangup`.
    Other(String),
}

impl CompletionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Ended => "ended",
            Self::Other(reason) => reason,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<&str> for CompletionStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "completed" => Self::Completed,
            "pending" => Self::Pending,
            "ended" | "" => Self::Ended,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for CompletionStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<CompletionStatus> for String {
    fn from(status: CompletionStatus) -> Self {
        match status {
            CompletionStatus::Other(reason) => reason,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
