//! A single user's rating of a story.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RatingId, StoryId, Timestamp, UserId};

use super::Score;

/// One rating row. At most one exists per `(user_id, story_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRating {
    pub id: RatingId,
    pub user_id: UserId,
    pub story_id: StoryId,
    pub score: Score,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StoryRating {
    /// Creates a first-time rating.
    pub fn new(user_id: UserId, story_id: StoryId, score: Score) -> Self {
        let now = Timestamp::now();
        Self {
            id: RatingId::new(),
            user_id,
            story_id,
            score,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the score in place, keeping identity and creation time.
    pub fn rescore(&mut self, score: Score) {
        self.score = score;
        self.updated_at = Timestamp::now();
    }
}

/// Per-user rating state for one story.
///
/// Transitions: `Unrated -> Rated` (first rating), `Rated -> Rated`
/// (re-rating), `Rated -> Unrated` (removal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "score", rename_all = "snake_case")]
pub enum RatingState {
    Unrated,
    Rated(Score),
}

impl RatingState {
    pub fn score(&self) -> Option<Score> {
        match self {
            RatingState::Unrated => None,
            RatingState::Rated(score) => Some(*score),
        }
    }

    pub fn is_rated(&self) -> bool {
        matches!(self, RatingState::Rated(_))
    }
}

impl From<Option<&StoryRating>> for RatingState {
    fn from(rating: Option<&StoryRating>) -> Self {
        match rating {
            Some(r) => RatingState::Rated(r.score),
            None => RatingState::Unrated,
        }
    }
}
