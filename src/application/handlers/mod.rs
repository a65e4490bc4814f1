//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod genre;
pub mod rating;

pub use catalog::{
    AdvancedSearchStoriesHandler, AdvancedSearchStoriesQuery, FeaturedKind, GetStoryBySlugHandler,
    GetStoryBySlugQuery, ListFeaturedStoriesHandler, ListFeaturedStoriesQuery, ListStoriesByGenreHandler,
    ListStoriesByGenreQuery, ListStoriesHandler, ListStoriesQuery, PagingPolicy, RecordStoryViewCommand,
    RecordStoryViewHandler, SearchStoriesHandler, SearchStoriesQuery, SetStoryGenresCommand,
    SetStoryGenresHandler, SetStoryGenresResult,
};
pub use genre::{
    CreateGenreCommand, CreateGenreHandler, DeleteGenreCommand, DeleteGenreHandler, GetGenreHandler,
    GetGenreQuery, ListGenresHandler, UpdateGenreCommand, UpdateGenreHandler,
};
pub use rating::{
    AggregateRefresh, DeleteMyRatingCommand, DeleteMyRatingHandler, DeleteMyRatingResult,
    GetMyRatingHandler, GetMyRatingQuery, GetStoryRatingHandler, GetStoryRatingQuery,
    RateStoryCommand, RateStoryHandler, RateStoryResult, RatingAggregateRefresher,
    RepairRatingAggregatesHandler, RepairReport,
};
