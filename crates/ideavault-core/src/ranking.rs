use crate::error::CoreError;
use crate::idea::Idea;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Display order for a list of ideas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Most votes first.
    #[default]
    Top,
    /// Most recently submitted first.
    New,
}

impl FromStr for RankingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "new" => Ok(Self::New),
            other => Err(CoreError::InvalidRankingMode(other.to_string())),
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::New => f.write_str("new"),
        }
    }
}

/// Total order over ideas for `mode`.
///
/// `Top` breaks vote ties by age (older first) and then by id; `New`
/// breaks timestamp ties by id.
pub fn compare(mode: RankingMode, a: &Idea, b: &Idea) -> Ordering {
    match mode {
        RankingMode::Top => b
            .vote_count
            .cmp(&a.vote_count)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id)),
        RankingMode::New => b
            .created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id)),
    }
}

/// Order `ideas` for display without reordering the slice itself.
pub fn rank(ideas: &[Idea], mode: RankingMode) -> Vec<&Idea> {
    let mut ranked: Vec<&Idea> = ideas.iter().collect();
    ranked.sort_by(|a, b| compare(mode, a, b));
    ranked
}
