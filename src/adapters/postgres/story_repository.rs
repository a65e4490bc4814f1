//! PostgreSQL implementation of StoryRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::{Genre, Story};
use crate::domain::foundation::{DomainError, ErrorCode, GenreId, StoryId};
use crate::domain::rating::RatingAggregate;
use crate::ports::StoryRepository;

use super::rows::{hydrate_stories, map_db_error, GenreRow, StoryRow, STORY_COLUMNS};

/// PostgreSQL implementation of StoryRepository.
#[derive(Clone)]
pub struct PostgresStoryRepository {
    pool: PgPool,
}

impl PostgresStoryRepository {
    /// Creates a new PostgresStoryRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryRepository for PostgresStoryRepository {
    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError> {
        let row: Option<StoryRow> = sqlx::query_as(&format!(
            "SELECT {} FROM stories s WHERE s.id = $1",
            STORY_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("fetch story", e))?;

        match row {
            Some(row) => Ok(hydrate_stories(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: &StoryId) -> Result<bool, DomainError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM stories WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_db_error("check story existence", e))?;

        Ok(exists)
    }

    async fn list_ids(&self) -> Result<Vec<StoryId>, DomainError> {
        let ids: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM stories ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("list story ids", e))?;

        Ok(ids.into_iter().map(|(id,)| StoryId::from_uuid(id)).collect())
    }

    async fn replace_genres(
        &self,
        story_id: &StoryId,
        genre_ids: &[GenreId],
    ) -> Result<Vec<Genre>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("begin transaction", e))?;

        // Locks the story row so concurrent replacements serialize.
        let locked: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM stories WHERE id = $1 FOR UPDATE")
                .bind(story_id.as_uuid())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| map_db_error("lock story", e))?;

        if locked.is_none() {
            return Err(DomainError::new(
                ErrorCode::StoryNotFound,
                format!("Story not found: {}", story_id),
            ));
        }

        sqlx::query("DELETE FROM story_genres WHERE story_id = $1")
            .bind(story_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("clear story genres", e))?;

        let ids: Vec<Uuid> = genre_ids.iter().map(|id| *id.as_uuid()).collect();
        if !ids.is_empty() {
            // Unknown genre ids match no row and are skipped.
            sqlx::query(
                r#"
                INSERT INTO story_genres (story_id, genre_id)
                SELECT $1, g.id FROM genres g WHERE g.id = ANY($2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(story_id.as_uuid())
            .bind(&ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("attach story genres", e))?;
        }

        let rows: Vec<GenreRow> = sqlx::query_as(
            r#"
            SELECT g.id, g.name, g.slug, g.description
            FROM story_genres sg
            JOIN genres g ON g.id = sg.genre_id
            WHERE sg.story_id = $1
            ORDER BY g.name ASC
            "#,
        )
        .bind(story_id.as_uuid())
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| map_db_error("reload story genres", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error("commit genre replacement", e))?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn update_cached_rating(
        &self,
        story_id: &StoryId,
        aggregate: &RatingAggregate,
    ) -> Result<(), DomainError> {
        sqlx::query("UPDATE stories SET rating = $2, rating_count = $3 WHERE id = $1")
            .bind(story_id.as_uuid())
            .bind(aggregate.cached_average())
            .bind(aggregate.count() as i32)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("update cached rating", e))?;

        Ok(())
    }

    async fn increment_view_count(&self, story_id: &StoryId) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE stories SET view_count = view_count + 1 WHERE id = $1")
            .bind(story_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("increment view count", e))?;

        Ok(result.rows_affected() > 0)
    }
}
