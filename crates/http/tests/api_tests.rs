//! Router-level tests driven through `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use interview_ingest_core::constants::SIGNATURE_HEADER;
use interview_ingest_core::webhook::{SignatureVerifier, sign};
use interview_ingest_http::{AppState, create_router};
use interview_ingest_service::{AnalyticsService, InterviewService, ParticipantIdStrategy};
use interview_ingest_storage::StorageBackend;
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "key_test";

fn app() -> Router {
    let storage = Arc::new(StorageBackend::new_memory());
    let interview_service = InterviewService::new(
        storage.clone(),
        ParticipantIdStrategy::Sequential.allocator(),
        SignatureVerifier::new(Some(SECRET.to_owned())),
    );
    let state = AppState {
        interview_service: Arc::new(interview_service),
        analytics_service: Arc::new(AnalyticsService::new(storage)),
    };
    create_router(Arc::new(state))
}

fn signed_webhook(body: &str) -> Request<Body> {
    let signature = sign(body.as_bytes(), SECRET, Utc::now().timestamp_millis());
    Request::post("/webhooks/retell")
        .header("content-type", "application/json")
        .header(SIGNATURE_HEADER, signature)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });
    (status, body)
}

fn call_ended(call_id: &str) -> String {
    json!({
        "event": "call_ended",
        "call": {
            "call_id": call_id,
            "start_timestamp": 1_000,
            "end_timestamp": 61_000,
            "call_analysis": {"call_successful": true},
            "transcript_object": [
                {"role": "agent", "content": "Are you happy?"},
                {"role": "user", "content": "Yes"}
            ]
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_liveness() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));
}

#[tokio::test]
async fn test_call_started_is_received() {
    let app = app();
    let body = json!({"event": "call_started", "call": {"call_id": "c1"}}).to_string();

    let (status, response) = send(&app, signed_webhook(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"message": "Received"}));

    let (_, interviews) = send(&app, get("/api/interviews")).await;
    assert_eq!(interviews, json!([]));
}

#[tokio::test]
async fn test_call_ended_is_persisted() {
    let app = app();
    let (status, response) = send(&app, signed_webhook(&call_ended("c1"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"message": "Success"}));

    let (status, interview) = send(&app, get("/api/interviews/c1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(interview["call_id"], "c1");
    assert_eq!(interview["duration"], 60_000);
    assert_eq!(interview["completion_status"], "completed");
    assert_eq!(interview["participant_id"], "participant-1");
    assert_eq!(interview["transcript"][1]["role"], "user");
}

#[tokio::test]
async fn test_missing_signature_is_unauthorized() {
    let request = Request::post("/webhooks/retell")
        .header("content-type", "application/json")
        .body(Body::from(call_ended("c1")))
        .unwrap();

    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid signature"}));
}

#[tokio::test]
async fn test_signature_checked_before_parsing() {
    let request = Request::post("/webhooks/retell")
        .header(SIGNATURE_HEADER, "v=1,d=00")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _) = send(&app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_body_is_unauthorized() {
    let mut request = signed_webhook(&call_ended("c1"));
    *request.body_mut() = Body::from(call_ended("c2"));

    let (status, _) = send(&app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_payload_is_bad_request() {
    let app = app();
    for body in ["{not json", r#"{"event":"call_ended"}"#, r#"{"event":"nope","call":{}}"#] {
        let (status, response) = send(&app, signed_webhook(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response, json!({"error": "Invalid payload"}));
    }
}

#[tokio::test]
async fn test_unknown_interview_is_not_found() {
    let (status, body) = send(&app(), get("/api/interviews/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_dashboard_reflects_writes() {
    let app = app();
    send(&app, signed_webhook(&call_ended("c1"))).await;
    send(&app, signed_webhook(&call_ended("c2"))).await;

    let (status, dashboard) = send(&app, get("/api/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["overview"]["total_interviews"], 2);
    assert_eq!(dashboard["overview"]["average_duration_secs"], 60);
    assert_eq!(dashboard["overview"]["completion_rate"], 100);
    assert_eq!(dashboard["questions"][0]["question"], "Are you happy?");
    assert_eq!(dashboard["questions"][0]["response_count"], 2);
}

#[tokio::test]
async fn test_api_health_memory_backend() {
    let (status, body) = send(&app(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body["timestamp"].is_string());
    assert!(body.get("error").is_none());
}
