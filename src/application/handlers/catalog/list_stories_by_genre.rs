//! ListStoriesByGenreHandler - Query handler for one genre's stories.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, StoryList, StoryQuery};
use crate::domain::foundation::GenreId;
use crate::ports::StoryReader;

use super::PagingPolicy;

/// Query to list published stories tagged with a genre.
#[derive(Debug, Clone)]
pub struct ListStoriesByGenreQuery {
    pub genre_id: GenreId,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Handler for listing stories by genre.
///
/// An unknown genre id yields an empty page rather than an error.
pub struct ListStoriesByGenreHandler {
    reader: Arc<dyn StoryReader>,
    paging: PagingPolicy,
}

impl ListStoriesByGenreHandler {
    pub fn new(reader: Arc<dyn StoryReader>, paging: PagingPolicy) -> Self {
        Self { reader, paging }
    }

    pub async fn handle(&self, query: ListStoriesByGenreQuery) -> Result<StoryList, CatalogError> {
        let page = self.paging.resolve(query.page, query.page_size)?;
        let list = self
            .reader
            .query(&StoryQuery::by_genre(query.genre_id, page))
            .await?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::domain::catalog::{Genre, Story};
    use crate::ports::StoryRepository;

    #[tokio::test]
    async fn returns_only_published_stories_with_the_genre() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let action = Genre::new("Action", None).unwrap();
        let romance = Genre::new("Romance", None).unwrap();
        catalog.insert_genre(action.clone()).await;
        catalog.insert_genre(romance.clone()).await;

        let mut tagged = Story::new("Blade", "blade");
        tagged.is_published = true;
        let mut other = Story::new("Letters", "letters");
        other.is_published = true;
        let draft = Story::new("Unfinished", "unfinished");
        for story in [&tagged, &other, &draft] {
            catalog.insert_story(story.clone()).await;
        }
        catalog.replace_genres(&tagged.id, &[action.id]).await.unwrap();
        catalog.replace_genres(&other.id, &[romance.id]).await.unwrap();
        catalog.replace_genres(&draft.id, &[action.id]).await.unwrap();

        let handler = ListStoriesByGenreHandler::new(catalog, PagingPolicy::default());
        let list = handler
            .handle(ListStoriesByGenreQuery {
                genre_id: action.id,
                page: None,
                page_size: None,
            })
            .await
            .unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.items[0].id, tagged.id);
        assert_eq!(list.items[0].genres, vec![action]);
    }

    #[tokio::test]
    async fn unknown_genre_gives_empty_page() {
        let handler =
            ListStoriesByGenreHandler::new(Arc::new(InMemoryCatalog::new()), PagingPolicy::default());

        let list = handler
            .handle(ListStoriesByGenreQuery {
                genre_id: GenreId::new(),
                page: Some(1),
                page_size: Some(10),
            })
            .await
            .unwrap();

        assert_eq!(list.total, 0);
        assert!(!list.has_more);
    }
}
