use ideavault_core::error::{CoreError, ValidationError};
use thiserror::Error;

/// Failure reported by an [`IdeaPersistence`](crate::persistence::IdeaPersistence)
/// backend.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lock file conflict: {0}")]
    LockConflict(String),

    #[error("unsupported ideas file version {0}")]
    UnsupportedVersion(u32),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("idea not found: {0}")]
    NotFound(String),

    #[error("ambiguous idea prefix '{prefix}': matches {count} ideas")]
    AmbiguousPrefix { prefix: String, count: usize },

    #[error("'{requester}' is not the author of idea {idea}")]
    Permission { idea: String, requester: String },

    #[error("stored collection holds idea {0} more than once")]
    DuplicateId(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("vault not found (searched upward from {0})")]
    VaultNotFound(String),

    #[error("vault already exists at {0}")]
    VaultExists(String),

    #[error("invalid config: {0}")]
    Config(String),
}
