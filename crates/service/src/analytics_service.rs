use std::sync::Arc;

use chrono::{DateTime, Utc};
use interview_ingest_core::analytics::{Dashboard, build_dashboard};
use interview_ingest_storage::{HealthCheck, InterviewStore, StorageBackend};

use crate::error::ServiceError;

/// Result of a store round-trip.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub checked_at: DateTime<Utc>,
    pub error: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

/// Read path: dashboard snapshots and store health.
pub struct AnalyticsService {
    storage: Arc<StorageBackend>,
}

impl AnalyticsService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Snapshots every interview and computes the dashboard on the blocking
    /// pool.
    pub async fn dashboard(&self) -> Result<Dashboard, ServiceError> {
        let interviews = self.storage.get_all_interviews().await?;
        let dashboard =
            tokio::task::spawn_blocking(move || build_dashboard(&interviews)).await?;
        tracing::debug!(
            total = dashboard.overview.total_interviews,
            questions = dashboard.questions.len(),
            "Built dashboard"
        );
        Ok(dashboard)
    }

    /// Never fails; a broken store is reported in the returned value.
    pub async fn health(&self) -> HealthReport {
        let error = match self.storage.ping().await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(backend = self.storage.kind(), error = %e, "Health check failed");
                Some(e.to_string())
            },
        };
        HealthReport { checked_at: Utc::now(), error }
    }
}
