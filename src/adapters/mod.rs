//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx/PostgreSQL catalog store
//! - `memory` - In-memory catalog store for tests and local runs

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCatalog;
pub use postgres::{
    PostgresGenreRepository, PostgresStoryRatingRepository, PostgresStoryReader,
    PostgresStoryRepository,
};
