use std::sync::Arc;

use anyhow::Result;
use interview_ingest_core::constants::DEFAULT_SIGNATURE_TOLERANCE_SECS;
use interview_ingest_core::webhook::SignatureVerifier;
use interview_ingest_core::{env_non_empty, env_parse_with_default};
use interview_ingest_http::{AppState, create_router};
use interview_ingest_service::{AnalyticsService, InterviewService, ParticipantIdStrategy};
use interview_ingest_storage::StorageBackend;

use crate::connect_postgres;

pub(crate) async fn run(port: u16, host: String, in_memory: bool) -> Result<()> {
    let storage = if in_memory {
        tracing::warn!("Using in-memory storage; interviews are lost on exit");
        StorageBackend::new_memory()
    } else {
        connect_postgres().await?
    };
    let storage = Arc::new(storage);

    let secret = env_non_empty("RETELL_API_KEY");
    if secret.is_none() {
        tracing::warn!("RETELL_API_KEY not set, every webhook will be rejected with 401");
    }
    let tolerance_secs =
        env_parse_with_default("RETELL_SIGNATURE_TOLERANCE_SECS", DEFAULT_SIGNATURE_TOLERANCE_SECS);
    let verifier = SignatureVerifier::new(secret).with_tolerance_secs(tolerance_secs);

    let strategy =
        env_parse_with_default("INTERVIEW_PARTICIPANT_IDS", ParticipantIdStrategy::default());
    tracing::info!(backend = storage.kind(), participant_ids = %strategy, "Storage ready");

    let interview_service =
        Arc::new(InterviewService::new(storage.clone(), strategy.allocator(), verifier));
    let analytics_service = Arc::new(AnalyticsService::new(storage));

    let state = Arc::new(AppState { interview_service, analytics_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
