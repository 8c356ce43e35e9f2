//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use interview_ingest_core::{Interview, InterviewUpdate};

use crate::error::StorageError;
use crate::traits::{HealthCheck, InterviewStore};
use crate::types::UpsertOutcome;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <crate::MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(crate::PgStorage),
    Memory(crate::MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── InterviewStore ───────────────────────────────────────────────

#[async_trait]
impl InterviewStore for StorageBackend {
    async fn upsert_interview(
        &self,
        interview: &Interview,
    ) -> Result<UpsertOutcome, StorageError> {
        dispatch!(self, InterviewStore, upsert_interview(interview))
    }

    async fn update_interview(
        &self,
        call_id: &str,
        update: &InterviewUpdate,
    ) -> Result<bool, StorageError> {
        dispatch!(self, InterviewStore, update_interview(call_id, update))
    }

    async fn get_interview_by_call_id(
        &self,
        call_id: &str,
    ) -> Result<Option<Interview>, StorageError> {
        dispatch!(self, InterviewStore, get_interview_by_call_id(call_id))
    }

    async fn get_all_interviews(&self) -> Result<Vec<Interview>, StorageError> {
        dispatch!(self, InterviewStore, get_all_interviews())
    }

    async fn count_interviews(&self) -> Result<u64, StorageError> {
        dispatch!(self, InterviewStore, count_interviews())
    }
}

// ── HealthCheck ──────────────────────────────────────────────────

#[async_trait]
impl HealthCheck for StorageBackend {
    async fn ping(&self) -> Result<(), StorageError> {
        dispatch!(self, HealthCheck, ping())
    }
}
