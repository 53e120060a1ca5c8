use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::idea_store::IdeaStore;
use crate::json_file::JsonFilePersistence;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const VAULT_DIR: &str = ".ideavault";
const CONFIG_FILE: &str = "config.json";
const IDEAS_FILE: &str = "ideas.json";

/// An on-disk `.ideavault/` directory: a `config.json` and the
/// `ideas.json` collection.
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
    config: StoreConfig,
}

impl Vault {
    /// Create a vault under `path` with a default config and no ideas.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::init_with(path, StoreConfig::default())
    }

    pub fn init_with(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        let dir = root.join(VAULT_DIR);
        if dir.exists() {
            return Err(StoreError::VaultExists(dir.display().to_string()));
        }

        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::Config(format!("cannot create {}: {}", dir.display(), e))
        })?;
        let config = StoreConfig {
            created_at: Some(Utc::now()),
            ..config
        };
        config.save(&dir.join(CONFIG_FILE))?;

        debug!(path = %dir.display(), "initialized vault");
        Ok(Self { root, config })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        let dir = root.join(VAULT_DIR);
        if !dir.is_dir() {
            return Err(StoreError::VaultNotFound(root.display().to_string()));
        }
        let config = StoreConfig::load(&dir.join(CONFIG_FILE))?;
        Ok(Self { root, config })
    }

    /// Search `start` and its ancestors for a `.ideavault/` directory.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, StoreError> {
        let start = start.as_ref();
        start
            .ancestors()
            .find(|dir| dir.join(VAULT_DIR).is_dir())
            .map(Self::open)
            .unwrap_or_else(|| Err(StoreError::VaultNotFound(start.display().to_string())))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self) -> PathBuf {
        self.root.join(VAULT_DIR)
    }

    pub fn ideas_path(&self) -> PathBuf {
        self.dir().join(IDEAS_FILE)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Open the idea store backed by this vault's `ideas.json`.
    pub fn store(&self) -> Result<IdeaStore<JsonFilePersistence>, StoreError> {
        IdeaStore::open(
            JsonFilePersistence::new(self.ideas_path()),
            self.config.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideavault_core::{Author, RankingMode, VoteDirection};

    #[test]
    fn init_and_open() {
        let dir = tempfile::tempdir().unwrap();
        Vault::init(dir.path()).unwrap();
        let vault = Vault::open(dir.path()).unwrap();
        assert!(vault.config().created_at.is_some());
        assert!(vault.dir().join("config.json").exists());
        assert!(!vault.ideas_path().exists());
    }

    #[test]
    fn init_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        Vault::init(dir.path()).unwrap();
        assert!(matches!(
            Vault::init(dir.path()),
            Err(StoreError::VaultExists(_))
        ));
    }

    #[test]
    fn open_missing_vault_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Vault::open(dir.path()),
            Err(StoreError::VaultNotFound(_))
        ));
    }

    #[test]
    fn discover_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        Vault::init(dir.path()).unwrap();
        let sub = dir.path().join("a").join("b");
        fs::create_dir_all(&sub).unwrap();
        let vault = Vault::discover(&sub).unwrap();
        assert_eq!(vault.root(), dir.path());
    }

    #[test]
    fn store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let vault = Vault::init_with(
            dir.path(),
            StoreConfig {
                default_ranking: RankingMode::New,
                ..StoreConfig::default()
            },
        )
        .unwrap();

        let id = {
            let mut store = vault.store().unwrap();
            let idea = store
                .submit("Keyboard shortcuts", "For power users", None, Author::new("a", "a"))
                .unwrap();
            store.vote(&idea.id, "b", VoteDirection::Up).unwrap();
            idea.id
        };

        let reopened = Vault::open(dir.path()).unwrap();
        assert_eq!(reopened.config().default_ranking, RankingMode::New);
        let store = reopened.store().unwrap();
        assert_eq!(store.get(&id).unwrap().vote_count, 1);
    }
}
