//! ListFeaturedStoriesHandler - Latest and hot story strips.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CatalogError, Story, StoryQuery};
use crate::ports::StoryReader;

use super::PagingPolicy;

/// Which featured strip to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeaturedKind {
    /// Most recently updated first.
    Latest,
    /// Most viewed first.
    Hot,
}

/// Query for a single bounded page of featured stories.
#[derive(Debug, Clone)]
pub struct ListFeaturedStoriesQuery {
    pub kind: FeaturedKind,
    pub limit: Option<u32>,
}

impl ListFeaturedStoriesQuery {
    pub fn latest(limit: u32) -> Self {
        Self {
            kind: FeaturedKind::Latest,
            limit: Some(limit),
        }
    }

    pub fn hot(limit: u32) -> Self {
        Self {
            kind: FeaturedKind::Hot,
            limit: Some(limit),
        }
    }
}

/// Handler for the latest/hot listings.
pub struct ListFeaturedStoriesHandler {
    reader: Arc<dyn StoryReader>,
    paging: PagingPolicy,
}

impl ListFeaturedStoriesHandler {
    pub fn new(reader: Arc<dyn StoryReader>, paging: PagingPolicy) -> Self {
        Self { reader, paging }
    }

    pub async fn handle(&self, query: ListFeaturedStoriesQuery) -> Result<Vec<Story>, CatalogError> {
        let limit = self.paging.featured(query.limit)?;
        let story_query = match query.kind {
            FeaturedKind::Latest => StoryQuery::latest(limit),
            FeaturedKind::Hot => StoryQuery::hot(limit),
        };
        let list = self.reader.query(&story_query).await?;
        Ok(list.items)
    }
}
