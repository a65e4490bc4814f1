//! PostgreSQL implementation of StoryRatingRepository.
//!
//! The `(user_id, story_id)` unique constraint makes `upsert` a single
//! statement: concurrent first ratings by the same user collapse into one
//! row instead of racing on a read-then-insert.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, StoryId, UserId};
use crate::domain::rating::{RatingAggregate, StoryRating};
use crate::ports::StoryRatingRepository;

use super::rows::{map_db_error, RatingRow};

/// PostgreSQL implementation of StoryRatingRepository.
#[derive(Clone)]
pub struct PostgresStoryRatingRepository {
    pool: PgPool,
}

impl PostgresStoryRatingRepository {
    /// Creates a new PostgresStoryRatingRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryRatingRepository for PostgresStoryRatingRepository {
    async fn upsert(&self, rating: &StoryRating) -> Result<StoryRating, DomainError> {
        let row: RatingRow = sqlx::query_as(
            r#"
            INSERT INTO story_ratings (id, user_id, story_id, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, story_id)
            DO UPDATE SET rating = EXCLUDED.rating, updated_at = EXCLUDED.updated_at
            RETURNING id, user_id, story_id, rating, created_at, updated_at
            "#,
        )
        .bind(rating.id.as_uuid())
        .bind(rating.user_id.as_uuid())
        .bind(rating.story_id.as_uuid())
        .bind(rating.score.value() as i16)
        .bind(rating.created_at.as_datetime())
        .bind(rating.updated_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("upsert rating", e))?;

        StoryRating::try_from(row)
    }

    async fn find_by_user_and_story(
        &self,
        user_id: &UserId,
        story_id: &StoryId,
    ) -> Result<Option<StoryRating>, DomainError> {
        let row: Option<RatingRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, story_id, rating, created_at, updated_at
            FROM story_ratings
            WHERE user_id = $1 AND story_id = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(story_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("fetch rating", e))?;

        row.map(StoryRating::try_from).transpose()
    }

    async fn delete_by_user_and_story(
        &self,
        user_id: &UserId,
        story_id: &StoryId,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM story_ratings WHERE user_id = $1 AND story_id = $2")
            .bind(user_id.as_uuid())
            .bind(story_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("delete rating", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn aggregate_for_story(&self, story_id: &StoryId) -> Result<RatingAggregate, DomainError> {
        let (average, count): (f64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(AVG(rating)::float8, 0), COUNT(*)
            FROM story_ratings
            WHERE story_id = $1
            "#,
        )
        .bind(story_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("aggregate ratings", e))?;

        Ok(RatingAggregate::from_parts(average, count.max(0) as u32))
    }
}
