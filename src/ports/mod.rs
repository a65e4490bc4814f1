//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the catalog store. Adapters implement these ports.
//!
//! - `StoryReader` - Filtered, sorted, paginated story queries
//! - `StoryRepository` - Genre association, cached rating, view counter
//! - `GenreRepository` - Genre persistence
//! - `StoryRatingRepository` - Per-user rating rows and the live aggregate

mod genre_repository;
mod story_rating_repository;
mod story_reader;
mod story_repository;

pub use genre_repository::GenreRepository;
pub use story_rating_repository::StoryRatingRepository;
pub use story_reader::StoryReader;
pub use story_repository::StoryRepository;
