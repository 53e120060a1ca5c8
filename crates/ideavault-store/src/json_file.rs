use crate::error::PersistenceError;
use crate::lockfile::Lockfile;
use crate::persistence::IdeaPersistence;
use ideavault_core::Idea;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct IdeasFileRef<'a> {
    version: u32,
    ideas: &'a [Idea],
}

#[derive(Deserialize)]
struct IdeasFile {
    version: u32,
    #[serde(default)]
    ideas: Vec<Idea>,
}

/// Stores the collection as a single pretty-printed JSON document,
/// rewritten through a [`Lockfile`] on every save.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IdeaPersistence for JsonFilePersistence {
    fn load(&self) -> Result<Vec<Idea>, PersistenceError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let file: IdeasFile = serde_json::from_slice(&data)?;
        if file.version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(file.version));
        }
        Ok(file.ideas)
    }

    fn save(&mut self, ideas: &[Idea]) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(&IdeasFileRef {
            version: FORMAT_VERSION,
            ideas,
        })?;
        let mut lock = Lockfile::acquire(&self.path)?;
        lock.write(&json)?;
        lock.commit()
    }
}
