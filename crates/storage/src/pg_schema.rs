//! PostgreSQL schema bootstrap for interview-ingest storage.
//!
//! Idempotent DDL run once when the pool connects. There is no versioning:
//! the table has a single shape.

use sqlx::PgPool;

/// Create the `interviews` table and its indexes if missing.
pub async fn ensure_pg_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interviews (
            id TEXT PRIMARY KEY,
            call_id TEXT NOT NULL UNIQUE,
            participant_id TEXT,
            transcript JSONB NOT NULL DEFAULT '[]',
            extracted_variables JSONB,
            duration BIGINT NOT NULL DEFAULT 0,
            completion_status TEXT NOT NULL DEFAULT 'pending',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_interviews_created ON interviews (created_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
