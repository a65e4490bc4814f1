//! Catalog query and command handlers.

mod advanced_search_stories;
mod get_story_by_slug;
mod list_featured_stories;
mod list_stories;
mod list_stories_by_genre;
mod paging;
mod record_story_view;
mod search_stories;
mod set_story_genres;

pub use advanced_search_stories::{AdvancedSearchStoriesHandler, AdvancedSearchStoriesQuery};
pub use get_story_by_slug::{GetStoryBySlugHandler, GetStoryBySlugQuery};
pub use list_featured_stories::{FeaturedKind, ListFeaturedStoriesHandler, ListFeaturedStoriesQuery};
pub use list_stories::{ListStoriesHandler, ListStoriesQuery};
pub use list_stories_by_genre::{ListStoriesByGenreHandler, ListStoriesByGenreQuery};
pub use paging::PagingPolicy;
pub use record_story_view::{RecordStoryViewCommand, RecordStoryViewHandler};
pub use search_stories::{SearchStoriesHandler, SearchStoriesQuery};
pub use set_story_genres::{SetStoryGenresCommand, SetStoryGenresHandler, SetStoryGenresResult};
