use thiserror::Error;

/// Why an inbound notification body was rejected.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Body is not JSON at all.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// Body is JSON but does not match the notification shape.
    #[error("schema mismatch: {0}")]
    Schema(String),
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => Self::Schema(err.to_string()),
            _ => Self::MalformedJson(err),
        }
    }
}
