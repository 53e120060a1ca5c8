use thiserror::Error;

/// A submission or vote request rejected before it touches any idea.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("voter id must not be empty")]
    EmptyVoter,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid idea id: {0}")]
    InvalidIdeaId(String),

    #[error("invalid ranking mode '{0}' (expected 'top' or 'new')")]
    InvalidRankingMode(String),

    #[error("invalid vote direction '{0}' (expected 1 or -1)")]
    InvalidVoteDirection(String),

    #[error("vote count {vote_count} cannot change by {delta} without overflowing")]
    TallyOverflow { vote_count: i64, delta: i64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
