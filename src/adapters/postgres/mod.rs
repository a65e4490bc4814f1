//! PostgreSQL adapters - Database implementations for the catalog ports.
//!
//! - `PostgresStoryReader` - Filtered, sorted, paginated story queries
//! - `PostgresStoryRepository` - Genre association, cached rating, view counter
//! - `PostgresGenreRepository` - Genre persistence
//! - `PostgresStoryRatingRepository` - Rating rows and the live aggregate

mod genre_repository;
mod rating_repository;
mod rows;
mod story_reader;
mod story_repository;

pub use genre_repository::PostgresGenreRepository;
pub use rating_repository::PostgresStoryRatingRepository;
pub use story_reader::PostgresStoryReader;
pub use story_repository::PostgresStoryRepository;
