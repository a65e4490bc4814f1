//! GetStoryRatingHandler - Query handler for the live rating aggregate.

use std::sync::Arc;

use crate::domain::foundation::StoryId;
use crate::domain::rating::{RatingAggregate, RatingError};
use crate::ports::StoryRatingRepository;

/// Query for a story's live rating aggregate.
#[derive(Debug, Clone)]
pub struct GetStoryRatingQuery {
    pub story_id: StoryId,
}

/// Handler for the live aggregate.
///
/// Reads the rating rows directly rather than the cached fields on the
/// story, so the result is never stale. A story with no ratings, or no
/// such story, yields average `0` and count `0`.
pub struct GetStoryRatingHandler {
    ratings: Arc<dyn StoryRatingRepository>,
}

impl GetStoryRatingHandler {
    pub fn new(ratings: Arc<dyn StoryRatingRepository>) -> Self {
        Self { ratings }
    }

    pub async fn handle(&self, query: GetStoryRatingQuery) -> Result<RatingAggregate, RatingError> {
        Ok(self.ratings.aggregate_for_story(&query.story_id).await?)
    }
}
