//! Row types and error mapping shared by the PostgreSQL adapters.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgExecutor;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::catalog::{Genre, Story, StoryStatus};
use crate::domain::foundation::{
    DomainError, ErrorCode, GenreId, RatingId, StoryId, Timestamp, UserId,
};
use crate::domain::rating::{Score, StoryRating};

/// Columns selected for every story read.
pub(crate) const STORY_COLUMNS: &str = "s.id, s.title, s.slug, s.description, s.is_published, \
     s.status, s.country, s.release_year, s.view_count, s.rating, s.rating_count, \
     s.created_at, s.updated_at";

/// Database row representation of a story (without genres).
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct StoryRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub status: String,
    pub country: Option<String>,
    pub release_year: Option<i32>,
    pub view_count: i64,
    pub rating: Option<f64>,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<StoryRow> for Story {
    type Error = DomainError;

    fn try_from(row: StoryRow) -> Result<Self, Self::Error> {
        let status: StoryStatus = row.status.parse().map_err(|e| {
            DomainError::database(format!("Invalid story status '{}': {}", row.status, e))
        })?;

        Ok(Story {
            id: StoryId::from_uuid(row.id),
            title: row.title,
            slug: row.slug,
            description: row.description,
            is_published: row.is_published,
            status,
            country: row.country,
            release_year: row.release_year,
            view_count: row.view_count,
            rating: row.rating,
            rating_count: row.rating_count.max(0) as u32,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
            genres: Vec::new(),
        })
    }
}

/// Database row representation of a genre.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct GenreRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Genre {
            id: GenreId::from_uuid(row.id),
            name: row.name,
            slug: row.slug,
            description: row.description,
        }
    }
}

/// A genre joined to the story it is attached to.
#[derive(Debug, sqlx::FromRow)]
struct StoryGenreRow {
    story_id: Uuid,
    id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
}

/// Database row representation of a rating.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct RatingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub story_id: Uuid,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RatingRow> for StoryRating {
    type Error = DomainError;

    fn try_from(row: RatingRow) -> Result<Self, Self::Error> {
        let score = Score::try_from_i32(row.rating as i32).map_err(|e| {
            DomainError::database(format!("Invalid stored rating {}: {}", row.id, e))
        })?;

        Ok(StoryRating {
            id: RatingId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            story_id: StoryId::from_uuid(row.story_id),
            score,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

/// Maps a driver error to a domain error.
///
/// Unique violations become `Conflict`, foreign key violations on a story
/// reference become `StoryNotFound`, everything else is a `DatabaseError`.
pub(crate) fn map_db_error(operation: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DomainError::new(
                ErrorCode::Conflict,
                format!("Failed to {}: {}", operation, db_err.message()),
            )
            .with_detail("constraint", db_err.constraint().unwrap_or("unknown"));
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::new(
                ErrorCode::StoryNotFound,
                format!("Failed to {}: referenced story does not exist", operation),
            );
        }
    }
    DomainError::database(format!("Failed to {}: {}", operation, err))
}

/// Converts story rows and attaches their genres in one extra query.
pub(crate) async fn hydrate_stories<'e, E>(
    executor: E,
    rows: Vec<StoryRow>,
) -> Result<Vec<Story>, DomainError>
where
    E: PgExecutor<'e>,
{
    let mut stories = rows
        .into_iter()
        .map(Story::try_from)
        .collect::<Result<Vec<Story>, DomainError>>()?;

    if stories.is_empty() {
        return Ok(stories);
    }

    let ids: Vec<Uuid> = stories.iter().map(|s| *s.id.as_uuid()).collect();
    let genre_rows: Vec<StoryGenreRow> = sqlx::query_as(
        r#"
        SELECT sg.story_id, g.id, g.name, g.slug, g.description
        FROM story_genres sg
        JOIN genres g ON g.id = sg.genre_id
        WHERE sg.story_id = ANY($1)
        ORDER BY g.name ASC
        "#,
    )
    .bind(&ids)
    .fetch_all(executor)
    .await
    .map_err(|e| map_db_error("load story genres", e))?;

    let mut by_story: HashMap<Uuid, Vec<Genre>> = HashMap::new();
    for row in genre_rows {
        by_story.entry(row.story_id).or_default().push(Genre {
            id: GenreId::from_uuid(row.id),
            name: row.name,
            slug: row.slug,
            description: row.description,
        });
    }

    for story in &mut stories {
        if let Some(genres) = by_story.remove(story.id.as_uuid()) {
            story.genres = genres;
        }
    }

    Ok(stories)
}
