use crate::ValidationError;

use super::WebhookEvent;

/// Parses and validates a raw notification body.
///
/// Either the whole body matches the notification shape or the call fails;
/// there is no partial result.
pub fn parse_webhook(body: &[u8]) -> Result<WebhookEvent, ValidationError> {
    let event: WebhookEvent = serde_json::from_slice(body)?;
    if event.call.call_id.trim().is_empty() {
        return Err(ValidationError::Schema("call.call_id must not be blank".to_owned()));
    }
    Ok(event)
}
