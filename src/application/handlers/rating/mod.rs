//! Rating command and query handlers.

mod aggregate_refresher;
mod delete_my_rating;
mod get_my_rating;
mod get_story_rating;
mod rate_story;
mod repair_rating_aggregates;

pub use aggregate_refresher::{AggregateRefresh, RatingAggregateRefresher};
pub use delete_my_rating::{DeleteMyRatingCommand, DeleteMyRatingHandler, DeleteMyRatingResult};
pub use get_my_rating::{GetMyRatingHandler, GetMyRatingQuery};
pub use get_story_rating::{GetStoryRatingHandler, GetStoryRatingQuery};
pub use rate_story::{RateStoryCommand, RateStoryHandler, RateStoryResult};
pub use repair_rating_aggregates::{RepairRatingAggregatesHandler, RepairReport};
