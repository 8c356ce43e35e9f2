//! InterviewStore implementation for PgStorage.

use super::*;

use crate::traits::InterviewStore;
use crate::types::UpsertOutcome;
use async_trait::async_trait;
use interview_ingest_core::InterviewUpdate;

#[async_trait]
impl InterviewStore for PgStorage {
    async fn upsert_interview(
        &self,
        interview: &Interview,
    ) -> Result<UpsertOutcome, StorageError> {
        // xmax is 0 only for a freshly inserted tuple.
        let inserted: bool = sqlx::query_scalar(&format!(
            "INSERT INTO interviews ({INTERVIEW_COLUMNS})
             VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
             ON CONFLICT (call_id) DO UPDATE SET
               transcript = EXCLUDED.transcript,
               duration = EXCLUDED.duration,
               completion_status = EXCLUDED.completion_status,
               extracted_variables = COALESCE(
                 EXCLUDED.extracted_variables, interviews.extracted_variables
               )
             RETURNING (xmax = 0) AS inserted"
        ))
        .bind(&interview.id)
        .bind(&interview.call_id)
        .bind(&interview.participant_id)
        .bind(serde_json::to_value(&interview.transcript)?)
        .bind(variables_to_json(interview.extracted_variables.as_ref())?)
        .bind(duration_to_i64(interview.duration)?)
        .bind(interview.completion_status.as_str())
        .bind(interview.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(if inserted { UpsertOutcome::Created } else { UpsertOutcome::Updated })
    }

    async fn update_interview(
        &self,
        call_id: &str,
        update: &InterviewUpdate,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE interviews SET
               transcript = $1,
               duration = $2,
               completion_status = $3,
               extracted_variables = COALESCE($4, extracted_variables)
             WHERE call_id = $5",
        )
        .bind(serde_json::to_value(&update.transcript)?)
        .bind(duration_to_i64(update.duration)?)
        .bind(update.completion_status.as_str())
        .bind(variables_to_json(update.extracted_variables.as_ref())?)
        .bind(call_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_interview_by_call_id(
        &self,
        call_id: &str,
    ) -> Result<Option<Interview>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {INTERVIEW_COLUMNS} FROM interviews WHERE call_id = $1"))
                .bind(call_id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_interview(&r)).transpose()
    }

    async fn get_all_interviews(&self) -> Result<Vec<Interview>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {INTERVIEW_COLUMNS} FROM interviews ORDER BY created_at DESC, call_id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_interview).collect()
    }

    async fn count_interviews(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM interviews").fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
