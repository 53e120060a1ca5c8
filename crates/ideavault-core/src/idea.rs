use crate::error::{CoreError, ValidationError};
use crate::hash::IdeaId;
use crate::serialize::content_id;
use crate::tally::{self, VoteOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Category assigned when a submission leaves it blank.
pub const DEFAULT_CATEGORY: &str = "General";

/// Display name used for authors without an email address.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Local User";

const TAG_IDEA: &str = "idea";

/// Direction of a single vote. Stored as `1` or `-1`; there is no zero
/// variant because "no vote" is the absence of a voter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn value(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl TryFrom<i8> for VoteDirection {
    type Error = CoreError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(CoreError::InvalidVoteDirection(other.to_string())),
        }
    }
}

impl From<VoteDirection> for i8 {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

impl FromStr for VoteDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "+1" | "1" => Ok(Self::Up),
            "down" | "-1" => Ok(Self::Down),
            other => Err(CoreError::InvalidVoteDirection(other.to_string())),
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.pad("up"),
            Self::Down => f.pad("down"),
        }
    }
}

/// Who submitted an idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub display_name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Build an author whose display name is the local part of `email`,
    /// falling back to [`ANONYMOUS_DISPLAY_NAME`].
    pub fn from_email(id: impl Into<String>, email: Option<&str>) -> Self {
        let display_name = email
            .and_then(|e| e.split('@').next())
            .map(str::trim)
            .filter(|local| !local.is_empty())
            .unwrap_or(ANONYMOUS_DISPLAY_NAME);
        Self::new(id, display_name)
    }
}

/// A validated request to create an idea. Its canonical form is what the
/// idea id is derived from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Submission {
    pub title: String,
    pub description: String,
    pub category: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Trim and validate the submitted fields.
    pub fn new(
        title: &str,
        description: &str,
        category: Option<&str>,
        author: Author,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            author,
            created_at,
        })
    }

    /// Turn the submission into a fresh idea with no votes.
    pub fn into_idea(self) -> Result<Idea, CoreError> {
        let id = content_id(TAG_IDEA, &self)?;
        Ok(Idea {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            author: self.author,
            vote_count: 0,
            voters: BTreeMap::new(),
            created_at: self.created_at,
        })
    }
}

/// A submitted proposal and its vote tally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub author: Author,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub voters: BTreeMap<String, VoteDirection>,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Apply `direction` from `voter_id` in place. On error the idea is
    /// left unchanged.
    pub fn apply_vote(
        &mut self,
        voter_id: &str,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, CoreError> {
        let result = tally::apply_vote(self.vote_count, &self.voters, voter_id, direction)?;
        self.vote_count = result.vote_count;
        self.voters = result.voters;
        Ok(result.outcome)
    }

    /// The voter's active vote, if any.
    pub fn vote_of(&self, voter_id: &str) -> Option<VoteDirection> {
        self.voters.get(voter_id).copied()
    }

    pub fn voter_sum(&self) -> i64 {
        self.voters.values().map(|d| d.value()).sum()
    }

    /// Whether `vote_count` equals the sum of recorded votes.
    pub fn is_reconciled(&self) -> bool {
        self.vote_count == self.voter_sum()
    }

    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author.id == user_id
    }
}
