//! In-process storage backend.
//!
//! Holds interviews in a map guarded by an async `RwLock`; every write runs
//! under the write lock, which makes the conditional upsert atomic.
//! Used by `serve --in-memory` and by tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use interview_ingest_core::{Interview, InterviewUpdate};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{HealthCheck, InterviewStore};
use crate::types::UpsertOutcome;

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    interviews: Arc<RwLock<HashMap<String, Interview>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InterviewStore for MemoryStorage {
    async fn upsert_interview(
        &self,
        interview: &Interview,
    ) -> Result<UpsertOutcome, StorageError> {
        let mut interviews = self.interviews.write().await;
        match interviews.get_mut(&interview.call_id) {
            Some(existing) => {
                existing.apply(interview.to_update());
                Ok(UpsertOutcome::Updated)
            },
            None => {
                interviews.insert(interview.call_id.clone(), interview.clone());
                Ok(UpsertOutcome::Created)
            },
        }
    }

    async fn update_interview(
        &self,
        call_id: &str,
        update: &InterviewUpdate,
    ) -> Result<bool, StorageError> {
        let mut interviews = self.interviews.write().await;
        Ok(interviews.get_mut(call_id).map(|existing| existing.apply(update.clone())).is_some())
    }

    async fn get_interview_by_call_id(
        &self,
        call_id: &str,
    ) -> Result<Option<Interview>, StorageError> {
        Ok(self.interviews.read().await.get(call_id).cloned())
    }

    async fn get_all_interviews(&self) -> Result<Vec<Interview>, StorageError> {
        let mut all: Vec<Interview> = self.interviews.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.call_id.cmp(&b.call_id)));
        Ok(all)
    }

    async fn count_interviews(&self) -> Result<u64, StorageError> {
        Ok(u64::try_from(self.interviews.read().await.len()).unwrap_or(u64::MAX))
    }
}

#[async_trait]
impl HealthCheck for MemoryStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
