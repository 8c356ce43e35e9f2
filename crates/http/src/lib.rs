//! HTTP API server for interview-ingest.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod response_types;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use interview_ingest_service::{AnalyticsService, InterviewService};

pub use response_types::{HealthResponse, MessageResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Webhook write path, including signature verification
    pub interview_service: Arc<InterviewService>,
    /// Dashboard snapshots and store health
    pub analytics_service: Arc<AnalyticsService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhooks/retell", post(handlers::webhook::retell_webhook))
        .route("/api/health", get(handlers::health::api_health))
        .route("/api/interviews", get(handlers::interviews::list_interviews))
        .route("/api/interviews/{call_id}", get(handlers::interviews::get_interview))
        .route("/api/dashboard", get(handlers::interviews::get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
