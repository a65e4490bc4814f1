//! DeleteMyRatingHandler - Command handler for removing a rating.

use std::sync::Arc;

use crate::domain::foundation::{StoryId, UserId};
use crate::domain::rating::RatingError;
use crate::ports::{StoryRatingRepository, StoryRepository};

use super::{AggregateRefresh, RatingAggregateRefresher};

/// Command to remove a user's rating of a story.
#[derive(Debug, Clone)]
pub struct DeleteMyRatingCommand {
    pub user_id: UserId,
    pub story_id: StoryId,
}

/// Result of a rating removal.
#[derive(Debug, Clone)]
pub struct DeleteMyRatingResult {
    /// False when the user had no rating to remove.
    pub removed: bool,
    /// Outcome of refreshing the story's cached rating.
    pub aggregate: AggregateRefresh,
}

/// Handler for removing ratings.
///
/// Removing a rating that does not exist succeeds. The cached aggregate is
/// refreshed either way.
pub struct DeleteMyRatingHandler {
    ratings: Arc<dyn StoryRatingRepository>,
    stories: Arc<dyn StoryRepository>,
    refresher: RatingAggregateRefresher,
}

impl DeleteMyRatingHandler {
    pub fn new(ratings: Arc<dyn StoryRatingRepository>, stories: Arc<dyn StoryRepository>) -> Self {
        let refresher = RatingAggregateRefresher::new(ratings.clone(), stories.clone());
        Self {
            ratings,
            stories,
            refresher,
        }
    }

    pub async fn handle(&self, cmd: DeleteMyRatingCommand) -> Result<DeleteMyRatingResult, RatingError> {
        if !self.stories.exists(&cmd.story_id).await? {
            return Err(RatingError::story_not_found(cmd.story_id));
        }

        let removed = self
            .ratings
            .delete_by_user_and_story(&cmd.user_id, &cmd.story_id)
            .await?;

        if removed {
            tracing::info!(
                story_id = %cmd.story_id,
                user_id = %cmd.user_id,
                "Story rating removed"
            );
        }

        let aggregate = self.refresher.refresh(&cmd.story_id).await;

        Ok(DeleteMyRatingResult { removed, aggregate })
    }
}
