//! Story repository port (write side).
//!
//! Stories themselves are authored elsewhere; this port covers the writes the
//! catalog owns: genre association, cached rating fields and the view counter.

use async_trait::async_trait;

use crate::domain::catalog::{Genre, Story};
use crate::domain::foundation::{DomainError, GenreId, StoryId};
use crate::domain::rating::RatingAggregate;

/// Repository port for story writes.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Find a story by id, regardless of publication state.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError>;

    /// Check if a story exists.
    async fn exists(&self, id: &StoryId) -> Result<bool, DomainError>;

    /// Ids of every story, for maintenance passes.
    async fn list_ids(&self) -> Result<Vec<StoryId>, DomainError>;

    /// Atomically replace the story's genre set.
    ///
    /// Ids that do not resolve to a genre are dropped. Genres no longer in the
    /// set are detached, never deleted. Returns the genres now attached.
    async fn replace_genres(
        &self,
        story_id: &StoryId,
        genre_ids: &[GenreId],
    ) -> Result<Vec<Genre>, DomainError>;

    /// Overwrite the cached rating average and count.
    ///
    /// Does not touch `updated_at`, so rating changes do not reorder
    /// "latest" listings.
    async fn update_cached_rating(
        &self,
        story_id: &StoryId,
        aggregate: &RatingAggregate,
    ) -> Result<(), DomainError>;

    /// Atomically add one to the view counter.
    ///
    /// Returns `false` if the story does not exist.
    async fn increment_view_count(&self, story_id: &StoryId) -> Result<bool, DomainError>;
}
