//! Service layer for interview-ingest
//!
//! Sits between the HTTP/CLI front ends and storage: the webhook write path
//! and the analytics read path.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod analytics_service;
pub mod error;
mod interview_service;
mod participant;

pub use analytics_service::{AnalyticsService, HealthReport};
pub use error::ServiceError;
pub use interview_service::{InterviewService, RecordOutcome};
pub use participant::{
    ParticipantIdAllocator, ParticipantIdStrategy, RandomParticipantIds, SequentialParticipantIds,
};
