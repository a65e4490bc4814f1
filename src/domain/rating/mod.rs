//! Rating module - per-user story scores and their aggregate.

mod aggregate;
mod errors;
mod score;
mod story_rating;

pub use aggregate::RatingAggregate;
pub use errors::RatingError;
pub use score::Score;
pub use story_rating::{RatingState, StoryRating};
