//! GetMyRatingHandler - Query handler for the caller's own rating.

use std::sync::Arc;

use crate::domain::foundation::{StoryId, UserId};
use crate::domain::rating::{RatingError, RatingState};
use crate::ports::StoryRatingRepository;

/// Query for a user's rating of a story.
#[derive(Debug, Clone)]
pub struct GetMyRatingQuery {
    pub user_id: UserId,
    pub story_id: StoryId,
}

/// Handler for reading a user's rating.
///
/// "Not rated yet" is [`RatingState::Unrated`], never an error.
pub struct GetMyRatingHandler {
    ratings: Arc<dyn StoryRatingRepository>,
}

impl GetMyRatingHandler {
    pub fn new(ratings: Arc<dyn StoryRatingRepository>) -> Self {
        Self { ratings }
    }

    pub async fn handle(&self, query: GetMyRatingQuery) -> Result<RatingState, RatingError> {
        let rating = self
            .ratings
            .find_by_user_and_story(&query.user_id, &query.story_id)
            .await?;
        Ok(RatingState::from(rating.as_ref()))
    }
}
