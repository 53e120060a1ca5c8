pub mod config;
pub mod error;
pub mod idea_store;
pub mod json_file;
pub mod lockfile;
pub mod persistence;
pub mod vault;

pub use config::{SaveFailurePolicy, StoreConfig};
pub use error::{PersistenceError, StoreError};
pub use idea_store::IdeaStore;
pub use json_file::JsonFilePersistence;
pub use persistence::{IdeaPersistence, MemoryPersistence};
pub use vault::Vault;
