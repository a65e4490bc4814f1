//! RateStoryHandler - Command handler for creating or changing a rating.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, StoryId, UserId};
use crate::domain::rating::{RatingError, Score, StoryRating};
use crate::ports::{StoryRatingRepository, StoryRepository};

use super::{AggregateRefresh, RatingAggregateRefresher};

/// Command to rate a story.
///
/// `score` is raw caller input and is validated against `1..=5`.
#[derive(Debug, Clone)]
pub struct RateStoryCommand {
    pub user_id: UserId,
    pub story_id: StoryId,
    pub score: i32,
}

/// Result of a successful rating.
#[derive(Debug, Clone)]
pub struct RateStoryResult {
    /// The stored rating row.
    pub rating: StoryRating,
    /// True when this was the user's first rating of the story.
    pub created: bool,
    /// Outcome of refreshing the story's cached rating.
    pub aggregate: AggregateRefresh,
}

/// Handler for rating stories.
pub struct RateStoryHandler {
    ratings: Arc<dyn StoryRatingRepository>,
    stories: Arc<dyn StoryRepository>,
    refresher: RatingAggregateRefresher,
}

impl RateStoryHandler {
    pub fn new(ratings: Arc<dyn StoryRatingRepository>, stories: Arc<dyn StoryRepository>) -> Self {
        let refresher = RatingAggregateRefresher::new(ratings.clone(), stories.clone());
        Self {
            ratings,
            stories,
            refresher,
        }
    }

    pub async fn handle(&self, cmd: RateStoryCommand) -> Result<RateStoryResult, RatingError> {
        // 1. Validate score
        let score = Score::try_from_i32(cmd.score)?;

        // 2. Story must exist
        if !self.stories.exists(&cmd.story_id).await? {
            return Err(RatingError::story_not_found(cmd.story_id));
        }

        // 3. Overwrite in place or create
        let existing = self
            .ratings
            .find_by_user_and_story(&cmd.user_id, &cmd.story_id)
            .await?;
        let created = existing.is_none();
        let rating = match existing {
            Some(mut rating) => {
                rating.rescore(score);
                rating
            }
            None => StoryRating::new(cmd.user_id, cmd.story_id, score),
        };

        // 4. Persist; the store's (user, story) key collapses concurrent first ratings
        let rating = self.ratings.upsert(&rating).await.map_err(|e| match e.code {
            ErrorCode::StoryNotFound => RatingError::story_not_found(cmd.story_id),
            _ => RatingError::from(e),
        })?;

        tracing::info!(
            story_id = %cmd.story_id,
            user_id = %cmd.user_id,
            score = rating.score.value(),
            created,
            "Story rated"
        );

        // 5. Refresh the cached aggregate; failure does not undo the rating
        let aggregate = self.refresher.refresh(&cmd.story_id).await;

        Ok(RateStoryResult {
            rating,
            created,
            aggregate,
        })
    }
}
