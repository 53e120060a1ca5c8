use crate::config::{SaveFailurePolicy, StoreConfig};
use crate::error::StoreError;
use crate::persistence::IdeaPersistence;
use chrono::{DateTime, Duration, Utc};
use ideavault_core::hash::MIN_PREFIX_LEN;
use ideavault_core::ranking::{self, RankingMode};
use ideavault_core::{Author, Idea, IdeaId, Submission, ValidationError, VoteDirection};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The idea collection plus the backend it is persisted to.
///
/// Every mutation is applied to a copy of the collection, saved in full,
/// and only then (or, under [`SaveFailurePolicy::Keep`], regardless)
/// becomes the store's state. Storage order is submission order; display
/// order comes from [`IdeaStore::list`].
pub struct IdeaStore<P: IdeaPersistence> {
    persistence: P,
    config: StoreConfig,
    ideas: Vec<Idea>,
}

impl<P: IdeaPersistence> IdeaStore<P> {
    /// Load the current collection from `persistence`.
    pub fn open(persistence: P, config: StoreConfig) -> Result<Self, StoreError> {
        let ideas = persistence.load()?;
        if let Some(dup) = first_duplicate(&ideas) {
            return Err(StoreError::DuplicateId(dup.hex().to_string()));
        }
        let unreconciled = ideas.iter().filter(|i| !i.is_reconciled()).count();
        if unreconciled > 0 {
            debug!(unreconciled, "loaded ideas whose tally carries an offset");
        }
        debug!(count = ideas.len(), "opened idea store");
        Ok(Self {
            persistence,
            config,
            ideas,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn into_persistence(self) -> P {
        self.persistence
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn get(&self, id: &IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|i| &i.id == id)
    }

    /// Resolve a full id or a unique prefix of at least four hex chars.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<IdeaId, StoreError> {
        let needle = id_or_prefix.trim();
        if let Ok(id) = IdeaId::parse(needle) {
            return match self.get(&id) {
                Some(_) => Ok(id),
                None => Err(StoreError::NotFound(id.hex().to_string())),
            };
        }
        if needle.len() < MIN_PREFIX_LEN {
            return Err(StoreError::NotFound(format!(
                "{} (prefix needs at least {} chars)",
                needle, MIN_PREFIX_LEN
            )));
        }

        let matches: Vec<&IdeaId> = self
            .ideas
            .iter()
            .map(|i| &i.id)
            .filter(|id| id.starts_with(needle))
            .collect();
        match matches.as_slice() {
            [] => Err(StoreError::NotFound(needle.to_string())),
            [id] => Ok((*id).clone()),
            _ => Err(StoreError::AmbiguousPrefix {
                prefix: needle.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Create and persist a new idea with no votes.
    pub fn submit(
        &mut self,
        title: &str,
        description: &str,
        category: Option<&str>,
        author: Author,
    ) -> Result<Idea, StoreError> {
        let submission =
            Submission::new(title, description, category, author, self.next_timestamp())?;
        let idea = submission.into_idea()?;

        let mut next = self.ideas.clone();
        next.push(idea.clone());
        self.commit(next)?;

        info!(idea = %idea.id, author = %idea.author.id, "submitted idea");
        Ok(idea)
    }

    /// Cast, flip, or revoke `voter_id`'s vote on an idea.
    pub fn vote(
        &mut self,
        id: &IdeaId,
        voter_id: &str,
        direction: VoteDirection,
    ) -> Result<Idea, StoreError> {
        if voter_id.trim().is_empty() {
            return Err(ValidationError::EmptyVoter.into());
        }
        let index = self.index_of(id)?;

        let mut next = self.ideas.clone();
        let outcome = next[index].apply_vote(voter_id, direction)?;
        let updated = next[index].clone();
        self.commit(next)?;

        info!(
            idea = %id,
            voter = voter_id,
            %direction,
            %outcome,
            vote_count = updated.vote_count,
            "recorded vote"
        );
        Ok(updated)
    }

    /// Remove an idea. When ownership is enforced only its author may.
    pub fn delete(&mut self, id: &IdeaId, requester_id: &str) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        if self.config.enforce_ownership && !self.ideas[index].is_authored_by(requester_id) {
            debug!(idea = %id, requester = requester_id, "delete refused");
            return Err(StoreError::Permission {
                idea: id.to_string(),
                requester: requester_id.to_string(),
            });
        }

        let mut next = self.ideas.clone();
        next.remove(index);
        self.commit(next)?;

        info!(idea = %id, requester = requester_id, "deleted idea");
        Ok(())
    }

    /// All ideas in display order for `mode`.
    pub fn list(&self, mode: RankingMode) -> Vec<&Idea> {
        ranking::rank(&self.ideas, mode)
    }

    fn index_of(&self, id: &IdeaId) -> Result<usize, StoreError> {
        self.ideas
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| StoreError::NotFound(id.hex().to_string()))
    }

    /// A creation time strictly later than every idea already held, so
    /// "new" ordering and submission ids never collide.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.ideas.iter().map(|i| i.created_at).max() {
            Some(latest) if latest >= now => latest + Duration::microseconds(1),
            _ => now,
        }
    }

    fn commit(&mut self, next: Vec<Idea>) -> Result<(), StoreError> {
        match self.persistence.save(&next) {
            Ok(()) => {
                self.ideas = next;
                Ok(())
            }
            Err(e) => {
                match self.config.on_save_failure {
                    SaveFailurePolicy::Rollback => {
                        warn!(error = %e, "save failed; in-memory change rolled back");
                    }
                    SaveFailurePolicy::Keep => {
                        warn!(error = %e, "save failed; keeping unsaved change in memory");
                        self.ideas = next;
                    }
                }
                Err(e.into())
            }
        }
    }
}

fn first_duplicate(ideas: &[Idea]) -> Option<&IdeaId> {
    let mut seen = HashSet::with_capacity(ideas.len());
    ideas.iter().map(|i| &i.id).find(|id| !seen.insert(*id))
}
