pub mod error;
pub mod hash;
pub mod idea;
pub mod ranking;
pub mod serialize;
pub mod tally;

pub use error::{CoreError, ValidationError};
pub use hash::IdeaId;
pub use idea::{Author, Idea, Submission, VoteDirection, DEFAULT_CATEGORY};
pub use ranking::RankingMode;
pub use tally::{TallyResult, VoteOutcome};
