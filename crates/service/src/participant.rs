//! Participant id allocation for calls that don't carry one.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use interview_ingest_core::constants::PARTICIPANT_ID_PREFIX;
use interview_ingest_storage::{InterviewStore, StorageError};

/// Hands out a participant id for a newly created interview.
///
/// Ids are a labelling convenience, not a key: implementations only promise
/// a well-formed `participant-…` string. Two concurrent allocations may
/// return the same id, and ids are not guaranteed to be dense or monotonic.
/// Callers that need a stable identity use the call id.
#[async_trait]
pub trait ParticipantIdAllocator: Send + Sync + fmt::Debug {
    async fn allocate(&self, store: &dyn InterviewStore) -> Result<String, StorageError>;
}

/// `participant-<n>` where `n` is one more than the stored interview count.
///
/// Reads a table-wide count, so concurrent first writes can collide.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialParticipantIds;

#[async_trait]
impl ParticipantIdAllocator for SequentialParticipantIds {
    async fn allocate(&self, store: &dyn InterviewStore) -> Result<String, StorageError> {
        let count = store.count_interviews().await?;
        Ok(format!("{PARTICIPANT_ID_PREFIX}{}", count.saturating_add(1)))
    }
}

/// `participant-<12 hex chars>` drawn from a v4 UUID; never touches the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomParticipantIds;

const RANDOM_ID_HEX_LEN: usize = 12;

#[async_trait]
impl ParticipantIdAllocator for RandomParticipantIds {
    async fn allocate(&self, _store: &dyn InterviewStore) -> Result<String, StorageError> {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        Ok(format!("{PARTICIPANT_ID_PREFIX}{}", &hex[..RANDOM_ID_HEX_LEN]))
    }
}

/// Allocation strategy as configured through `INTERVIEW_PARTICIPANT_IDS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParticipantIdStrategy {
    #[default]
    Sequential,
    Random,
}

impl ParticipantIdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
        }
    }

    #[must_use]
    pub fn allocator(self) -> Box<dyn ParticipantIdAllocator> {
        match self {
            Self::Sequential => Box::new(SequentialParticipantIds),
            Self::Random => Box::new(RandomParticipantIds),
        }
    }
}

impl fmt::Display for ParticipantIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantIdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "random" => Ok(Self::Random),
            other => Err(format!("unknown participant id strategy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use interview_ingest_storage::MemoryStorage;

    use super::*;

    #[tokio::test]
    async fn test_sequential_starts_at_one() {
        let store = MemoryStorage::new();
        let id = SequentialParticipantIds.allocate(&store).await.unwrap();
        assert_eq!(id, "participant-1");
    }

    #[tokio::test]
    async fn test_random_shape() {
        let store = MemoryStorage::new();
        let id = RandomParticipantIds.allocate(&store).await.unwrap();
        let suffix = id.strip_prefix("participant-").unwrap();
        assert_eq!(suffix.len(), 12);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, RandomParticipantIds.allocate(&store).await.unwrap());
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("random".parse::<ParticipantIdStrategy>(), Ok(ParticipantIdStrategy::Random));
        assert_eq!(
            " Sequential ".parse::<ParticipantIdStrategy>(),
            Ok(ParticipantIdStrategy::Sequential)
        );
        assert!("uuid".parse::<ParticipantIdStrategy>().is_err());
        assert_eq!(ParticipantIdStrategy::default().to_string(), "sequential");
    }
}
