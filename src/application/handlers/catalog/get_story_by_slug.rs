//! GetStoryBySlugHandler - Query handler for a published story page.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Story};
use crate::ports::StoryReader;

/// Query to fetch a published story by slug.
#[derive(Debug, Clone)]
pub struct GetStoryBySlugQuery {
    pub slug: String,
}

/// Handler for fetching a story by slug.
///
/// Drafts are reported as not found.
pub struct GetStoryBySlugHandler {
    reader: Arc<dyn StoryReader>,
}

impl GetStoryBySlugHandler {
    pub fn new(reader: Arc<dyn StoryReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetStoryBySlugQuery) -> Result<Story, CatalogError> {
        let slug = query.slug.trim();
        if slug.is_empty() {
            return Err(CatalogError::validation("slug", "Slug cannot be empty"));
        }

        self.reader
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| CatalogError::StorySlugNotFound(slug.to_string()))
    }
}
