//! Errors returned by interview stores.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A second writer inserted the same call id first.
    #[error("call id already stored: {0}")]
    Duplicate(String),

    /// Connection, pool or query failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A value could not be encoded for its column.
    #[error("cannot encode {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Bootstrap DDL failed on connect.
    #[error("schema error: {0}")]
    Schema(String),
}

impl StorageError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Unique violations (SQLSTATE 23505) become `Duplicate` so the service can
/// retry them as updates; everything else stays a `Database` error.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption { context: "JSON column".to_owned(), source: Box::new(err) }
    }
}
