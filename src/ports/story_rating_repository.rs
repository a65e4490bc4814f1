//! Story rating repository port.
//!
//! # Design
//!
//! - **One row per (user, story)**: implementations must back `upsert` with a
//!   uniqueness constraint so concurrent first ratings cannot duplicate rows;
//!   the last writer's score wins
//! - **Live aggregate**: `aggregate_for_story` reads the current rows and is
//!   the authoritative source; the value cached on the story may lag it

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, StoryId, UserId};
use crate::domain::rating::{RatingAggregate, StoryRating};

/// Repository port for per-user story ratings.
#[async_trait]
pub trait StoryRatingRepository: Send + Sync {
    /// Insert the rating, or overwrite the score of the existing row for the
    /// same `(user_id, story_id)`.
    ///
    /// Returns the stored row; on overwrite its id and `created_at` are the
    /// existing row's.
    async fn upsert(&self, rating: &StoryRating) -> Result<StoryRating, DomainError>;

    /// Returns `None` if the user has not rated the story.
    async fn find_by_user_and_story(
        &self,
        user_id: &UserId,
        story_id: &StoryId,
    ) -> Result<Option<StoryRating>, DomainError>;

    /// Remove the user's rating. Returns `false` if there was none.
    async fn delete_by_user_and_story(
        &self,
        user_id: &UserId,
        story_id: &StoryId,
    ) -> Result<bool, DomainError>;

    /// Average and count over the story's current rating rows.
    async fn aggregate_for_story(&self, story_id: &StoryId) -> Result<RatingAggregate, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn story_rating_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn StoryRatingRepository) {}
    }
}
