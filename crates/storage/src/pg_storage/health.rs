//! HealthCheck implementation for PgStorage.

use super::PgStorage;

use crate::error::StorageError;
use crate::traits::HealthCheck;
use async_trait::async_trait;

#[async_trait]
impl HealthCheck for PgStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        let _: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
