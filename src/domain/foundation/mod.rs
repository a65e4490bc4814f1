//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, pagination and error types
//! that form the vocabulary of the story catalog domain.

mod errors;
mod ids;
mod pagination;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{GenreId, RatingId, StoryId, UserId};
pub use pagination::PageRequest;
pub use timestamp::Timestamp;
