//! ListStoriesHandler - Query handler for the catalog listing.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, StoryList, StoryQuery};
use crate::ports::StoryReader;

use super::PagingPolicy;

/// Query to list stories, newest update first.
#[derive(Debug, Clone, Default)]
pub struct ListStoriesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Include drafts (admin listing).
    pub include_unpublished: bool,
}

impl ListStoriesQuery {
    /// Create a paginated query over published stories.
    pub fn published(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            include_unpublished: false,
        }
    }
}

/// Handler for listing stories.
pub struct ListStoriesHandler {
    reader: Arc<dyn StoryReader>,
    paging: PagingPolicy,
}

impl ListStoriesHandler {
    pub fn new(reader: Arc<dyn StoryReader>, paging: PagingPolicy) -> Self {
        Self { reader, paging }
    }

    pub async fn handle(&self, query: ListStoriesQuery) -> Result<StoryList, CatalogError> {
        let page = self.paging.resolve(query.page, query.page_size)?;
        let list = self
            .reader
            .query(&StoryQuery::listing(page, query.include_unpublished))
            .await?;
        Ok(list)
    }
}
