//! AdvancedSearchStoriesHandler - Multi-filter story search.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, RawSearchFilters, SearchFilters, StoryList, StoryQuery};
use crate::ports::StoryReader;

use super::PagingPolicy;

/// Query for an advanced search.
///
/// Filters arrive raw; blank values and unknown sort keys are normalized
/// away. An unknown status matches no story.
#[derive(Debug, Clone, Default)]
pub struct AdvancedSearchStoriesQuery {
    pub filters: RawSearchFilters,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Handler for advanced search.
pub struct AdvancedSearchStoriesHandler {
    reader: Arc<dyn StoryReader>,
    paging: PagingPolicy,
}

impl AdvancedSearchStoriesHandler {
    pub fn new(reader: Arc<dyn StoryReader>, paging: PagingPolicy) -> Self {
        Self { reader, paging }
    }

    pub async fn handle(&self, query: AdvancedSearchStoriesQuery) -> Result<StoryList, CatalogError> {
        let page = self.paging.resolve(query.page, query.page_size)?;
        let Some(filters) = SearchFilters::normalize(query.filters) else {
            tracing::debug!("Advanced story search with unmatchable filters");
            return Ok(StoryList::empty(&page));
        };

        tracing::debug!(
            sort = %filters.sort,
            genre_slugs = filters.genre_slugs.len(),
            has_text = filters.text.is_some(),
            "Advanced story search"
        );

        Ok(self.reader.query(&StoryQuery::advanced(filters, page)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::domain::catalog::{Genre, Story, StoryStatus};
    use crate::ports::StoryRepository;

    fn story(title: &str, year: Option<i32>, status: StoryStatus) -> Story {
        let mut story = Story::new(title, title.to_lowercase().replace(' ', "-"));
        story.is_published = true;
        story.release_year = year;
        story.status = status;
        story
    }

    fn raw() -> RawSearchFilters {
        RawSearchFilters::default()
    }

    #[tokio::test]
    async fn year_and_status_filters_are_conjoined() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let hit = story("Hit", Some(2015), StoryStatus::Ongoing);
        for s in [
            hit.clone(),
            story("Wrong Year", Some(2016), StoryStatus::Ongoing),
            story("Wrong Status", Some(2015), StoryStatus::Completed),
            story("No Year", None, StoryStatus::Ongoing),
        ] {
            catalog.insert_story(s).await;
        }
        let handler = AdvancedSearchStoriesHandler::new(catalog, PagingPolicy::default());

        let list = handler
            .handle(AdvancedSearchStoriesQuery {
                filters: RawSearchFilters {
                    year_from: Some(2015),
                    year_to: Some(2015),
                    status: Some("ongoing".to_string()),
                    ..raw()
                },
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.items[0].id, hit.id);
    }

    #[tokio::test]
    async fn genre_slugs_match_any_listed_slug() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let action = Genre::new("Action", None).unwrap();
        let comedy = Genre::new("Comedy", None).unwrap();
        let horror = Genre::new("Horror", None).unwrap();
        for g in [&action, &comedy, &horror] {
            catalog.insert_genre(g.clone()).await;
        }
        let a = story("A", None, StoryStatus::Ongoing);
        let c = story("C", None, StoryStatus::Ongoing);
        let h = story("H", None, StoryStatus::Ongoing);
        for s in [&a, &c, &h] {
            catalog.insert_story(s.clone()).await;
        }
        catalog.replace_genres(&a.id, &[action.id]).await.unwrap();
        catalog.replace_genres(&c.id, &[comedy.id]).await.unwrap();
        catalog.replace_genres(&h.id, &[horror.id]).await.unwrap();
        let handler = AdvancedSearchStoriesHandler::new(catalog, PagingPolicy::default());

        let list = handler
            .handle(AdvancedSearchStoriesQuery {
                filters: RawSearchFilters {
                    genre_slugs: vec!["action".to_string(), "comedy".to_string()],
                    sort_by: Some("name".to_string()),
                    ..raw()
                },
                ..Default::default()
            })
            .await
            .unwrap();

        let titles: Vec<&str> = list.items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn unknown_sort_falls_back_to_latest() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let mut older = story("Older", None, StoryStatus::Ongoing);
        older.updated_at = older.updated_at.plus_secs(-3_600);
        let newer = story("Newer", None, StoryStatus::Ongoing);
        catalog.insert_story(older).await;
        catalog.insert_story(newer).await;
        let handler = AdvancedSearchStoriesHandler::new(catalog, PagingPolicy::default());

        let list = handler
            .handle(AdvancedSearchStoriesQuery {
                filters: RawSearchFilters {
                    sort_by: Some("trending".to_string()),
                    ..raw()
                },
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(list.items[0].title, "Newer");
    }

    #[tokio::test]
    async fn blank_filters_do_not_constrain() {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog.insert_story(story("One", Some(2001), StoryStatus::Hiatus)).await;
        catalog.insert_story(story("Two", None, StoryStatus::Completed)).await;
        let handler = AdvancedSearchStoriesHandler::new(catalog, PagingPolicy::default());

        let list = handler
            .handle(AdvancedSearchStoriesQuery {
                filters: RawSearchFilters {
                    query: Some("  ".to_string()),
                    status: Some(String::new()),
                    country: Some(" ".to_string()),
                    ..raw()
                },
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(list.total, 2);
    }

    #[tokio::test]
    async fn unknown_status_returns_empty_page() {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog.insert_story(story("One", Some(2001), StoryStatus::Ongoing)).await;
        let handler = AdvancedSearchStoriesHandler::new(catalog, PagingPolicy::default());

        let list = handler
            .handle(AdvancedSearchStoriesQuery {
                filters: RawSearchFilters {
                    status: Some("cancelled".to_string()),
                    ..raw()
                },
                page: Some(2),
                page_size: Some(5),
            })
            .await
            .unwrap();

        assert!(list.items.is_empty());
        assert_eq!(list.total, 0);
        assert_eq!(list.page, 2);
    }
}
