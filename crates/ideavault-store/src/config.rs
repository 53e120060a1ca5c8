use crate::error::StoreError;
use chrono::{DateTime, Utc};
use ideavault_core::RankingMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_VERSION: u32 = 1;

/// What the store does with its in-memory collection when a save fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFailurePolicy {
    /// Discard the mutation so memory matches what was last persisted.
    #[default]
    Rollback,
    /// Keep the mutation in memory; storage lags behind until the next
    /// successful save.
    Keep,
}

/// Behaviour switches for an [`IdeaStore`](crate::IdeaStore), persisted as
/// `config.json` in a vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Only the author may delete an idea.
    #[serde(default = "default_true")]
    pub enforce_ownership: bool,
    #[serde(default)]
    pub on_save_failure: SaveFailurePolicy,
    #[serde(default)]
    pub default_ranking: RankingMode,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            created_at: None,
            enforce_ownership: true,
            on_save_failure: SaveFailurePolicy::default(),
            default_ranking: RankingMode::default(),
        }
    }
}

impl StoreConfig {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = fs::read(path).map_err(|e| {
            StoreError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_slice(&data)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;
        if config.version != CONFIG_VERSION {
            return Err(StoreError::Config(format!(
                "unsupported config version {}",
                config.version
            )));
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::Config(e.to_string()))?;
        fs::write(path, json).map_err(|e| {
            StoreError::Config(format!("cannot write {}: {}", path.display(), e))
        })
    }
}
