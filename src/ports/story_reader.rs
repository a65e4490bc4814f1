//! Story reader port (read side).
//!
//! Answers every browsing and search intent expressed as a [`StoryQuery`].
//!
//! # Contract
//!
//! - Predicates in the query are combined with AND; absent ones are ignored
//! - `text` is matched as a literal, case-insensitive substring of title or
//!   description; implementations using pattern operators must escape it
//!   (see [`crate::domain::catalog::escape_like`])
//! - `genre_slugs` matches a story carrying ANY of the listed slugs
//! - `total` counts the filtered set before pagination
//! - Returned stories carry their genres

use async_trait::async_trait;

use crate::domain::catalog::{Story, StoryList, StoryQuery};
use crate::domain::foundation::DomainError;

/// Reader port for story queries.
#[async_trait]
pub trait StoryReader: Send + Sync {
    /// Runs a story query and returns one page plus the total match count.
    async fn query(&self, query: &StoryQuery) -> Result<StoryList, DomainError>;

    /// Finds a published story by slug, with genres attached.
    ///
    /// Returns `None` if absent or unpublished.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Story>, DomainError>;
}
