#![allow(clippy::unwrap_used, reason = "test code")]

use super::*;
use crate::{HealthCheck, InterviewStore, MemoryStorage, StorageBackend, UpsertOutcome};

#[tokio::test]
async fn test_upsert_creates_then_updates() {
    let storage = MemoryStorage::new();
    let first = make_interview("call-1", "participant-1");

    assert_eq!(storage.upsert_interview(&first).await.unwrap(), UpsertOutcome::Created);

    let mut second = make_interview("call-1", "participant-99");
    second.id = "other-id".to_owned();
    second.apply(make_update("completed", 5_000));
    assert_eq!(storage.upsert_interview(&second).await.unwrap(), UpsertOutcome::Updated);

    let stored = storage.get_interview_by_call_id("call-1").await.unwrap().unwrap();
    assert_eq!(stored.id, "id-call-1");
    assert_eq!(stored.participant_id.as_deref(), Some("participant-1"));
    assert_eq!(stored.created_at, first.created_at);
    assert_eq!(stored.duration, 5_000);
    assert!(stored.completion_status.is_completed());
    assert_eq!(storage.count_interviews().await.unwrap(), 1);
}

#[tokio::test]
async fn test_upsert_without_variables_keeps_stored_ones() {
    let storage = MemoryStorage::new();
    let mut first = make_interview("call-vars", "participant-1");
    first.extracted_variables = Some(food_variables("pizza"));
    storage.upsert_interview(&first).await.unwrap();

    let second = make_interview("call-vars", "participant-1");
    assert!(second.extracted_variables.is_none());
    storage.upsert_interview(&second).await.unwrap();

    let stored = storage.get_interview_by_call_id("call-vars").await.unwrap().unwrap();
    let vars = stored.extracted_variables.unwrap();
    assert_eq!(vars.favorite_food.as_deref(), Some("pizza"));
}

#[tokio::test]
async fn test_update_interview_missing_returns_false() {
    let storage = MemoryStorage::new();
    let updated = storage.update_interview("nope", &make_update("completed", 1)).await.unwrap();
    assert!(!updated);
    assert_eq!(storage.count_interviews().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_interview_overwrites_mutable_fields() {
    let storage = MemoryStorage::new();
    storage.upsert_interview(&make_interview("call-2", "participant-2")).await.unwrap();

    let mut update = make_update("user_hangup", 42);
    update.extracted_variables = Some(food_variables("sushi"));
    assert!(storage.update_interview("call-2", &update).await.unwrap());

    let stored = storage.get_interview_by_call_id("call-2").await.unwrap().unwrap();
    assert_eq!(stored.duration, 42);
    assert_eq!(stored.completion_status.as_str(), "user_hangup");
    assert_eq!(stored.participant_id.as_deref(), Some("participant-2"));
    assert_eq!(
        stored.extracted_variables.and_then(|v| v.favorite_food).as_deref(),
        Some("sushi")
    );
}

#[tokio::test]
async fn test_get_all_interviews_newest_first() {
    let storage = MemoryStorage::new();
    storage.upsert_interview(&make_interview_at("old", "p-1", minutes_ago(30))).await.unwrap();
    storage.upsert_interview(&make_interview_at("new", "p-2", minutes_ago(1))).await.unwrap();
    storage.upsert_interview(&make_interview_at("mid", "p-3", minutes_ago(10))).await.unwrap();

    let all = storage.get_all_interviews().await.unwrap();
    let ids: Vec<&str> = all.iter().map(|i| i.call_id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn test_get_missing_interview_is_none() {
    let storage = MemoryStorage::new();
    assert!(storage.get_interview_by_call_id("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_upserts_create_one_record() {
    let storage = MemoryStorage::new();
    let mut handles = Vec::new();
    for n in 0..16 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            let interview = make_interview("race", &format!("participant-{n}"));
            storage.upsert_interview(&interview).await.unwrap()
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap() == UpsertOutcome::Created {
            created += 1;
        }
    }
    assert_eq!(created, 1);
    assert_eq!(storage.count_interviews().await.unwrap(), 1);
}

#[tokio::test]
async fn test_backend_dispatches_to_memory() {
    let backend = StorageBackend::new_memory();
    assert_eq!(backend.kind(), "memory");
    backend.ping().await.unwrap();

    let outcome = backend.upsert_interview(&make_interview("call-b", "p-1")).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(backend.count_interviews().await.unwrap(), 1);
    assert_eq!(backend.get_all_interviews().await.unwrap().len(), 1);
}
