//! The story store.
//!
//! [`StoryStore`] owns the authoritative story collection and its persistence
//! lifecycle. The collection is loaded once when the store is opened and the
//! full serialised collection is rewritten to the slot after every mutation —
//! there is no partial or incremental persistence, and no delete or edit
//! operation exists (stories are append-only, newest first).
//!
//! ## Failure policy
//!
//! - An absent, unreadable, or unparsable slot loads as the empty collection.
//!   Corruption is logged at `warn` level and never surfaced to the caller.
//! - A persistence-write failure is logged at `warn` level and swallowed, so
//!   the in-memory state still reflects the append for the rest of the session.

use crate::constants::STORAGE_KEY;
use crate::error::{StoryError, StoryResult};
use crate::persist::KeyValueSlot;
use crate::story::{CategoryFilter, Story, StoryId};

/// Owns the story collection and the slot it persists to.
pub struct StoryStore {
    stories: Vec<Story>,
    slot: Box<dyn KeyValueSlot>,
}

impl StoryStore {
    /// Opens a store over `slot`, loading whatever collection it holds.
    ///
    /// An empty, missing, or corrupt slot yields an empty collection; the store
    /// never fails to open. A corrupt payload is treated exactly like no data,
    /// so the next successful append overwrites it.
    pub fn open(slot: Box<dyn KeyValueSlot>) -> Self {
        let stories = match slot.read(STORAGE_KEY) {
            Ok(Some(payload)) => match decode(&payload) {
                Ok(stories) => stories,
                Err(e) => {
                    tracing::warn!("stored story collection is corrupt, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read stored story collection, starting empty: {e}");
                Vec::new()
            }
        };

        Self { stories, slot }
    }

    /// Prepends `story` to the collection and persists the result.
    ///
    /// Id generation is the publication flow's job, but the store still
    /// enforces the uniqueness invariant: a colliding id rejects the append
    /// outright, leaving both the collection and the slot untouched.
    ///
    /// A persistence-write failure does *not* fail the append; it is logged and
    /// the in-memory collection keeps the new story.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::DuplicateStoryId`] if a story with the same id is
    /// already in the collection.
    pub fn append(&mut self, story: Story) -> StoryResult<()> {
        if self.stories.iter().any(|s| s.id == story.id) {
            return Err(StoryError::DuplicateStoryId(story.id.to_string()));
        }

        self.stories.insert(0, story);
        if let Err(e) = self.persist() {
            tracing::warn!("failed to persist story collection, keeping in-memory state: {e}");
        }

        Ok(())
    }

    /// Returns the full collection, newest first.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Returns the stories selected by `filter`, preserving collection order.
    ///
    /// [`CategoryFilter::All`] selects every story; [`CategoryFilter::Only`]
    /// selects the subsequence with an exactly equal category.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&Story> {
        match filter {
            CategoryFilter::All => self.stories.iter().collect(),
            CategoryFilter::Only(category) => self
                .stories
                .iter()
                .filter(|s| s.category == category)
                .collect(),
        }
    }

    /// Looks up a single story by id, for the detail view.
    pub fn find(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| &s.id == id)
    }

    /// Returns the number of stories in the collection.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Returns true if the collection holds no stories.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    fn persist(&mut self) -> StoryResult<()> {
        let payload = encode(&self.stories)?;
        self.slot.write(STORAGE_KEY, &payload)
    }
}

impl std::fmt::Debug for StoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryStore")
            .field("stories", &self.stories.len())
            .finish_non_exhaustive()
    }
}

/// Serialises the full collection as a flat JSON array.
fn encode(stories: &[Story]) -> StoryResult<String> {
    serde_json::to_string(stories).map_err(StoryError::Serialization)
}

/// Deserialises a persisted collection payload.
fn decode(payload: &str) -> StoryResult<Vec<Story>> {
    serde_json::from_str(payload).map_err(StoryError::Deserialization)
}
