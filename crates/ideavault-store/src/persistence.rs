//! The persistence seam of the idea store.
//!
//! A backend only needs to load and save the whole collection. The store
//! calls `save` after every mutation with the complete resulting list.

use crate::error::PersistenceError;
use ideavault_core::Idea;

pub trait IdeaPersistence {
    /// Everything stored so far, or an empty list for a fresh backend.
    fn load(&self) -> Result<Vec<Idea>, PersistenceError>;

    /// Replace the stored collection with `ideas`.
    fn save(&mut self, ideas: &[Idea]) -> Result<(), PersistenceError>;
}

impl<P: IdeaPersistence + ?Sized> IdeaPersistence for &mut P {
    fn load(&self) -> Result<Vec<Idea>, PersistenceError> {
        (**self).load()
    }

    fn save(&mut self, ideas: &[Idea]) -> Result<(), PersistenceError> {
        (**self).save(ideas)
    }
}

impl<P: IdeaPersistence + ?Sized> IdeaPersistence for Box<P> {
    fn load(&self) -> Result<Vec<Idea>, PersistenceError> {
        (**self).load()
    }

    fn save(&mut self, ideas: &[Idea]) -> Result<(), PersistenceError> {
        (**self).save(ideas)
    }
}

/// In-process backend holding the last saved collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    ideas: Vec<Idea>,
    saves: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn with_ideas(ideas: Vec<Idea>) -> Self {
        Self { ideas, saves: 0 }
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl IdeaPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<Idea>, PersistenceError> {
        Ok(self.ideas.clone())
    }

    fn save(&mut self, ideas: &[Idea]) -> Result<(), PersistenceError> {
        self.ideas = ideas.to_vec();
        self.saves += 1;
        Ok(())
    }
}
