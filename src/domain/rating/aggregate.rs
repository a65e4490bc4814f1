//! Rating aggregate (average and count) for a story.

use serde::{Deserialize, Serialize};

/// Average score and number of ratings for one story.
///
/// Always computed from the full current set of rating rows, never adjusted
/// incrementally. With no ratings the average is `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingAggregate {
    average: f64,
    count: u32,
}

impl RatingAggregate {
    /// The aggregate of a story nobody has rated.
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            count: 0,
        }
    }

    /// Computes the aggregate from raw scores.
    pub fn from_scores(scores: &[u8]) -> Self {
        if scores.is_empty() {
            return Self::empty();
        }
        let sum: u64 = scores.iter().map(|s| *s as u64).sum();
        Self {
            average: sum as f64 / scores.len() as f64,
            count: scores.len() as u32,
        }
    }

    /// Builds an aggregate from values computed by the store.
    ///
    /// A zero count forces a zero average; averages are clamped into `[0, 5]`.
    pub fn from_parts(average: f64, count: u32) -> Self {
        if count == 0 || !average.is_finite() {
            return Self::empty();
        }
        Self {
            average: average.clamp(0.0, 5.0),
            count,
        }
    }

    /// Live average; `0.0` when there are no ratings.
    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// The value cached on the story: absent when there are no ratings.
    pub fn cached_average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.average)
        }
    }
}

impl Default for RatingAggregate {
    fn default() -> Self {
        Self::empty()
    }
}
