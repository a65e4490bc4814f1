//! PostgreSQL implementation of GenreRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::Genre;
use crate::domain::foundation::{DomainError, ErrorCode, GenreId};
use crate::ports::GenreRepository;

use super::rows::{map_db_error, GenreRow};

/// PostgreSQL implementation of GenreRepository.
#[derive(Clone)]
pub struct PostgresGenreRepository {
    pool: PgPool,
}

impl PostgresGenreRepository {
    /// Creates a new PostgresGenreRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PostgresGenreRepository {
    async fn list_all(&self) -> Result<Vec<Genre>, DomainError> {
        let rows: Vec<GenreRow> =
            sqlx::query_as("SELECT id, name, slug, description FROM genres ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_db_error("list genres", e))?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, DomainError> {
        let row: Option<GenreRow> =
            sqlx::query_as("SELECT id, name, slug, description FROM genres WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_db_error("fetch genre", e))?;

        Ok(row.map(Genre::from))
    }

    async fn find_by_ids(&self, ids: &[GenreId]) -> Result<Vec<Genre>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows: Vec<GenreRow> = sqlx::query_as(
            "SELECT id, name, slug, description FROM genres WHERE id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("resolve genres", e))?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn save(&self, genre: &Genre) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO genres (id, name, slug, description) VALUES ($1, $2, $3, $4)")
            .bind(genre.id.as_uuid())
            .bind(&genre.name)
            .bind(&genre.slug)
            .bind(&genre.description)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("insert genre", e))?;

        Ok(())
    }

    async fn update(&self, genre: &Genre) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE genres SET name = $2, slug = $3, description = $4 WHERE id = $1",
        )
        .bind(genre.id.as_uuid())
        .bind(&genre.name)
        .bind(&genre.slug)
        .bind(&genre.description)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("update genre", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::GenreNotFound,
                format!("Genre not found: {}", genre.id),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &GenreId) -> Result<bool, DomainError> {
        // story_genres rows go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("delete genre", e))?;

        Ok(result.rows_affected() > 0)
    }
}
