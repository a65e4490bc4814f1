//! Story read model and lifecycle status.
//!
//! Stories are authored by administrative tooling outside this crate; the
//! catalog only reads them, attaches genres, bumps the view counter and keeps
//! the cached rating fields in sync with the rating rows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StoryId, Timestamp, ValidationError};
use crate::domain::rating::RatingAggregate;

use super::Genre;

/// Publication lifecycle of a serialized story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    #[default]
    Ongoing,
    Completed,
    Hiatus,
}

impl StoryStatus {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryStatus::Ongoing => "ongoing",
            StoryStatus::Completed => "completed",
            StoryStatus::Hiatus => "hiatus",
        }
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StoryStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ongoing" => Ok(StoryStatus::Ongoing),
            "completed" => Ok(StoryStatus::Completed),
            "hiatus" => Ok(StoryStatus::Hiatus),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown story status '{}'", other),
            )),
        }
    }
}

/// A story as seen by catalog queries.
///
/// # Invariants
///
/// - `rating_count == 0` exactly when `rating` is `None`
/// - `rating`, when present, lies in `[0, 5]`
///
/// The cached rating is refreshed after every rating change and may briefly
/// lag the live aggregate when refreshes race or fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub status: StoryStatus,
    /// ISO country code of origin (e.g. `JP`, `KR`).
    pub country: Option<String>,
    pub release_year: Option<i32>,
    pub view_count: i64,
    /// Cached average score; `None` means no ratings yet.
    pub rating: Option<f64>,
    pub rating_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub genres: Vec<Genre>,
}

impl Story {
    /// Creates an unpublished, unrated story with no genres.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: StoryId::new(),
            title: title.into(),
            slug: slug.into(),
            description: None,
            is_published: false,
            status: StoryStatus::default(),
            country: None,
            release_year: None,
            view_count: 0,
            rating: None,
            rating_count: 0,
            created_at: now,
            updated_at: now,
            genres: Vec::new(),
        }
    }

    /// Overwrites the cached rating fields from a freshly computed aggregate.
    pub fn apply_rating(&mut self, aggregate: &RatingAggregate) {
        self.rating = aggregate.cached_average();
        self.rating_count = aggregate.count();
    }

    /// Returns true if this story carries a genre with the given slug.
    pub fn has_genre_slug(&self, slug: &str) -> bool {
        self.genres.iter().any(|g| g.slug == slug)
    }
}
