//! Recomputation of a story's cached rating.
//!
//! The refresh always re-reads the full current set of rating rows, so a
//! later successful refresh corrects any earlier stale or failed one. Two
//! refreshes racing on the same story may land out of order; the cached
//! value is then stale until the next rating change. The live aggregate
//! query is authoritative.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, StoryId};
use crate::domain::rating::RatingAggregate;
use crate::ports::{StoryRatingRepository, StoryRepository};

/// Outcome of refreshing a story's cached rating.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateRefresh {
    /// The cache now holds this aggregate.
    Refreshed(RatingAggregate),
    /// The cache was left as it was.
    Failed { reason: String },
}

impl AggregateRefresh {
    pub fn aggregate(&self) -> Option<&RatingAggregate> {
        match self {
            AggregateRefresh::Refreshed(aggregate) => Some(aggregate),
            AggregateRefresh::Failed { .. } => None,
        }
    }

    pub fn is_refreshed(&self) -> bool {
        matches!(self, AggregateRefresh::Refreshed(_))
    }
}

/// Recomputes and persists the cached rating of a story.
///
/// Failures never propagate: they are logged and returned as
/// [`AggregateRefresh::Failed`].
#[derive(Clone)]
pub struct RatingAggregateRefresher {
    ratings: Arc<dyn StoryRatingRepository>,
    stories: Arc<dyn StoryRepository>,
}

impl RatingAggregateRefresher {
    pub fn new(ratings: Arc<dyn StoryRatingRepository>, stories: Arc<dyn StoryRepository>) -> Self {
        Self { ratings, stories }
    }

    pub async fn refresh(&self, story_id: &StoryId) -> AggregateRefresh {
        match self.recompute(story_id).await {
            Ok(aggregate) => {
                tracing::debug!(
                    story_id = %story_id,
                    average = aggregate.average(),
                    count = aggregate.count(),
                    "Cached story rating refreshed"
                );
                AggregateRefresh::Refreshed(aggregate)
            }
            Err(e) => {
                tracing::warn!(
                    story_id = %story_id,
                    error = %e,
                    "Cached story rating refresh failed; value is stale until the next rating change"
                );
                AggregateRefresh::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn recompute(&self, story_id: &StoryId) -> Result<RatingAggregate, DomainError> {
        let aggregate = self.ratings.aggregate_for_story(story_id).await?;
        self.stories.update_cached_rating(story_id, &aggregate).await?;
        Ok(aggregate)
    }
}
