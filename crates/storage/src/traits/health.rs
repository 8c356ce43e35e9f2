use async_trait::async_trait;

use crate::error::StorageError;

/// Liveness of the underlying store.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Cheapest possible round-trip to the store.
    async fn ping(&self) -> Result<(), StorageError>;
}
