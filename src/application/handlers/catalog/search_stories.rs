//! SearchStoriesHandler - Substring search over titles and descriptions.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, StoryList, StoryQuery};
use crate::ports::StoryReader;

use super::PagingPolicy;

/// Query for a text search.
///
/// A blank `text` applies no text filter.
#[derive(Debug, Clone, Default)]
pub struct SearchStoriesQuery {
    pub text: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Admin search: drafts are included.
    pub include_drafts: bool,
}

impl SearchStoriesQuery {
    pub fn public(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn admin(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            include_drafts: true,
            ..Default::default()
        }
    }
}

/// Handler for text search.
pub struct SearchStoriesHandler {
    reader: Arc<dyn StoryReader>,
    paging: PagingPolicy,
}

impl SearchStoriesHandler {
    pub fn new(reader: Arc<dyn StoryReader>, paging: PagingPolicy) -> Self {
        Self { reader, paging }
    }

    pub async fn handle(&self, query: SearchStoriesQuery) -> Result<StoryList, CatalogError> {
        let page = self.paging.resolve(query.page, query.page_size)?;
        let story_query = if query.include_drafts {
            StoryQuery::admin_search(&query.text, page)
        } else {
            StoryQuery::text_search(&query.text, page)
        };
        Ok(self.reader.query(&story_query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::domain::catalog::Story;

    async fn seeded() -> Arc<InMemoryCatalog> {
        let catalog = Arc::new(InMemoryCatalog::new());
        for (title, published) in [
            ("100% Hero", true),
            ("100x Hero", true),
            ("Top 1000", true),
            ("snake_case", true),
            ("snakeXcase", true),
            ("100% Draft", false),
        ] {
            let mut story = Story::new(title, title.to_lowercase().replace(' ', "-"));
            story.is_published = published;
            catalog.insert_story(story).await;
        }
        catalog
    }

    fn titles(list: &StoryList) -> Vec<String> {
        let mut titles: Vec<String> = list.items.iter().map(|s| s.title.clone()).collect();
        titles.sort();
        titles
    }

    #[tokio::test]
    async fn percent_matches_only_literally() {
        let handler = SearchStoriesHandler::new(seeded().await, PagingPolicy::default());

        let list = handler.handle(SearchStoriesQuery::public("100%")).await.unwrap();

        assert_eq!(titles(&list), vec!["100% Hero".to_string()]);
    }

    #[tokio::test]
    async fn underscore_matches_only_literally() {
        let handler = SearchStoriesHandler::new(seeded().await, PagingPolicy::default());

        let list = handler.handle(SearchStoriesQuery::public("e_c")).await.unwrap();

        assert_eq!(titles(&list), vec!["snake_case".to_string()]);
    }

    #[tokio::test]
    async fn admin_search_includes_drafts() {
        let handler = SearchStoriesHandler::new(seeded().await, PagingPolicy::default());

        let list = handler.handle(SearchStoriesQuery::admin("100%")).await.unwrap();

        assert_eq!(
            titles(&list),
            vec!["100% Draft".to_string(), "100% Hero".to_string()]
        );
    }

    #[tokio::test]
    async fn blank_text_returns_every_published_story() {
        let handler = SearchStoriesHandler::new(seeded().await, PagingPolicy::default());

        let list = handler.handle(SearchStoriesQuery::public("   ")).await.unwrap();

        assert_eq!(list.total, 5);
    }
}
