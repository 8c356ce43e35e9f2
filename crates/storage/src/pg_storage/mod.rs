//! PostgreSQL storage backend using sqlx.

mod health;
mod interviews;

use chrono::{DateTime, Utc};
use interview_ingest_core::constants::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use interview_ingest_core::{CompletionStatus, ExtractedVariables, Interview, TranscriptMessage};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_schema::ensure_pg_schema;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        ensure_pg_schema(&pool).await.map_err(|e| StorageError::Schema(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) const INTERVIEW_COLUMNS: &str = "id, call_id, participant_id, transcript, \
     extracted_variables, duration, completion_status, created_at";

/// Transcript column; a corrupt value degrades to an empty transcript.
fn parse_transcript(call_id: &str, value: serde_json::Value) -> Vec<TranscriptMessage> {
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(call_id, error = %e, "corrupt transcript in DB, treating as empty");
        Vec::new()
    })
}

/// Extracted variables column; a corrupt value degrades to absent.
fn parse_variables(call_id: &str, value: Option<serde_json::Value>) -> Option<ExtractedVariables> {
    let value = value.filter(|v| !v.is_null())?;
    serde_json::from_value(value)
        .map_err(|e| {
            tracing::warn!(call_id, error = %e, "corrupt extracted_variables in DB, ignoring");
        })
        .ok()
}

pub(crate) fn row_to_interview(row: &sqlx::postgres::PgRow) -> Result<Interview, StorageError> {
    let call_id: String = row.try_get("call_id")?;
    let transcript: serde_json::Value = row.try_get("transcript")?;
    let extracted: Option<serde_json::Value> = row.try_get("extracted_variables")?;
    let duration: i64 = row.try_get("duration")?;
    let status: String = row.try_get("completion_status")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Interview {
        id: row.try_get("id")?,
        participant_id: row.try_get("participant_id")?,
        transcript: parse_transcript(&call_id, transcript),
        extracted_variables: parse_variables(&call_id, extracted),
        duration: u64::try_from(duration).unwrap_or(0),
        completion_status: CompletionStatus::from(status),
        created_at,
        call_id,
    })
}

/// Convert a duration to the BIGINT column type.
pub(crate) fn duration_to_i64(duration: u64) -> Result<i64, StorageError> {
    i64::try_from(duration).map_err(|e| StorageError::DataCorruption {
        context: "duration exceeds i64::MAX".into(),
        source: Box::new(e),
    })
}

/// Extracted variables as a nullable JSONB bind.
pub(crate) fn variables_to_json(
    vars: Option<&ExtractedVariables>,
) -> Result<Option<serde_json::Value>, StorageError> {
    Ok(vars.map(serde_json::to_value).transpose()?)
}
