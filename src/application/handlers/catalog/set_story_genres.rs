//! SetStoryGenresHandler - Command handler replacing a story's genre set.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Genre};
use crate::domain::foundation::{ErrorCode, GenreId, StoryId};
use crate::ports::{GenreRepository, StoryRepository};

/// Command to replace every genre attached to a story.
#[derive(Debug, Clone)]
pub struct SetStoryGenresCommand {
    pub story_id: StoryId,
    pub genre_ids: Vec<GenreId>,
}

/// Result of a genre replacement.
#[derive(Debug, Clone)]
pub struct SetStoryGenresResult {
    /// Genres now attached to the story.
    pub genres: Vec<Genre>,
    /// Requested ids that matched no genre.
    pub dropped: Vec<GenreId>,
}

/// Handler for replacing a story's genres.
///
/// Unknown genre ids are dropped, not rejected; an empty or all-unknown
/// list clears the story's genres. The replacement itself is atomic in the
/// store.
pub struct SetStoryGenresHandler {
    stories: Arc<dyn StoryRepository>,
    genres: Arc<dyn GenreRepository>,
}

impl SetStoryGenresHandler {
    pub fn new(stories: Arc<dyn StoryRepository>, genres: Arc<dyn GenreRepository>) -> Self {
        Self { stories, genres }
    }

    pub async fn handle(&self, cmd: SetStoryGenresCommand) -> Result<SetStoryGenresResult, CatalogError> {
        // 1. Story must exist
        if !self.stories.exists(&cmd.story_id).await? {
            return Err(CatalogError::story_not_found(cmd.story_id));
        }

        // 2. Resolve ids, keeping first occurrence order
        let mut requested: Vec<GenreId> = Vec::with_capacity(cmd.genre_ids.len());
        for id in cmd.genre_ids {
            if !requested.contains(&id) {
                requested.push(id);
            }
        }
        let resolved: Vec<GenreId> = self
            .genres
            .find_by_ids(&requested)
            .await?
            .into_iter()
            .map(|g| g.id)
            .collect();
        let (kept, dropped): (Vec<GenreId>, Vec<GenreId>) =
            requested.into_iter().partition(|id| resolved.contains(id));

        // 3. Replace atomically; a story deleted in between surfaces as not found
        let genres = self
            .stories
            .replace_genres(&cmd.story_id, &kept)
            .await
            .map_err(|e| match e.code {
                ErrorCode::StoryNotFound => CatalogError::story_not_found(cmd.story_id),
                _ => CatalogError::from(e),
            })?;

        tracing::info!(
            story_id = %cmd.story_id,
            attached = genres.len(),
            dropped = dropped.len(),
            "Story genres replaced"
        );

        Ok(SetStoryGenresResult { genres, dropped })
    }
}
