//! Catalog module - stories, genres and the story query model.

mod errors;
mod genre;
mod list;
mod query;
mod search;
mod story;

pub use errors::CatalogError;
pub use genre::{slugify, Genre, MAX_GENRE_NAME_LENGTH};
pub use list::StoryList;
pub use query::{StoryQuery, Visibility};
pub use search::{contains_pattern, escape_like, RawSearchFilters, SearchFilters, SortOrder, LIKE_ESCAPE};
pub use story::{Story, StoryStatus};
