//! Shared constants for interview-ingest.

/// Header carrying the platform's webhook signature.
pub const SIGNATURE_HEADER: &str = "x-retell-signature";

/// Default replay window for signed webhooks, in seconds.
pub const DEFAULT_SIGNATURE_TOLERANCE_SECS: u64 = 300;

/// Prefix for generated participant identifiers.
pub const PARTICIPANT_ID_PREFIX: &str = "participant-";

/// Metadata key the platform uses to pass through a known participant.
pub const PARTICIPANT_ID_METADATA_KEY: &str = "participant_id";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
