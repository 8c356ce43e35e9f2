//! Inbound call-lifecycle notifications from the voice platform.
//!
//! Authentication ([`SignatureVerifier`]) runs on the raw body first, then
//! [`parse_webhook`] turns the same bytes into a typed [`WebhookEvent`].

mod derive;
mod payload;
mod signature;
mod validate;

pub use derive::{resolve_completion_status, resolve_duration};
pub use payload::*;
pub use signature::{SignatureVerifier, sign};
pub use validate::parse_webhook;
