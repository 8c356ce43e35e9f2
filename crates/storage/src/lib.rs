//! Storage layer for interview-ingest
//!
//! PostgreSQL storage for production and an in-memory store for local runs
//! and tests, both behind the same async traits.

mod backend;
pub mod error;
mod memory;
mod pg_schema;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::{HealthCheck, InterviewStore};
pub use types::UpsertOutcome;
