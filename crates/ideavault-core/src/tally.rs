//! Vote tallying.
//!
//! A voter holds at most one active vote per idea. Requesting the direction
//! they already hold revokes it, requesting the opposite flips it, and a
//! voter without a vote casts one. The engine only ever applies deltas, so
//! `vote_count - sum(voters)` is the same before and after every call.

use crate::error::CoreError;
use crate::idea::VoteDirection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What a vote request did to the voter's recorded vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteOutcome {
    Cast,
    Revoked,
    Flipped,
}

impl fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cast => f.write_str("cast"),
            Self::Revoked => f.write_str("revoked"),
            Self::Flipped => f.write_str("flipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyResult {
    pub vote_count: i64,
    pub voters: BTreeMap<String, VoteDirection>,
    pub outcome: VoteOutcome,
}

/// Compute the tally after `voter_id` requests `direction`.
///
/// Fails with [`CoreError::TallyOverflow`] when the new count does not fit
/// in an `i64`, which only an imported tally near the limits can reach.
pub fn apply_vote(
    vote_count: i64,
    voters: &BTreeMap<String, VoteDirection>,
    voter_id: &str,
    direction: VoteDirection,
) -> Result<TallyResult, CoreError> {
    let existing = voters.get(voter_id).copied();
    let (delta, outcome) = match existing {
        Some(existing) if existing == direction => (-direction.value(), VoteOutcome::Revoked),
        Some(existing) => (direction.value() - existing.value(), VoteOutcome::Flipped),
        None => (direction.value(), VoteOutcome::Cast),
    };
    let vote_count = vote_count
        .checked_add(delta)
        .ok_or(CoreError::TallyOverflow { vote_count, delta })?;

    let mut voters = voters.clone();
    match outcome {
        VoteOutcome::Revoked => {
            voters.remove(voter_id);
        }
        VoteOutcome::Cast | VoteOutcome::Flipped => {
            voters.insert(voter_id.to_string(), direction);
        }
    }

    Ok(TallyResult {
        vote_count,
        voters,
        outcome,
    })
}
