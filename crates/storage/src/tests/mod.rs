//! Test utilities and module declarations for storage tests.

use chrono::{DateTime, Duration, Utc};
use interview_ingest_core::{
    CompletionStatus, ExtractedVariables, Interview, InterviewUpdate, TranscriptMessage,
};

pub fn make_update(status: &str, duration: u64) -> InterviewUpdate {
    InterviewUpdate {
        transcript: vec![
            TranscriptMessage::agent("What's your favorite food?"),
            TranscriptMessage::user("Pizza"),
        ],
        duration,
        completion_status: CompletionStatus::from(status),
        extracted_variables: None,
    }
}

pub fn make_interview(call_id: &str, participant_id: &str) -> Interview {
    make_interview_at(call_id, participant_id, Utc::now())
}

pub fn make_interview_at(
    call_id: &str,
    participant_id: &str,
    created_at: DateTime<Utc>,
) -> Interview {
    Interview::from_update(
        format!("id-{call_id}"),
        call_id.to_owned(),
        Some(participant_id.to_owned()),
        make_update("ended", 1_000),
        created_at,
    )
}

pub fn food_variables(food: &str) -> ExtractedVariables {
    ExtractedVariables {
        is_woman: Some(true),
        favorite_food: Some(food.to_owned()),
        ..Default::default()
    }
}

pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

mod memory_tests;
