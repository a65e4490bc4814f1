//! Story query model.
//!
//! Every browsing and search intent is expressed as a [`StoryQuery`]: a
//! conjunction of optional predicates, a sort order and a page. Store adapters
//! translate it into their own query language; [`StoryQuery::matches`] and
//! [`StoryQuery::compare`] define the reference semantics they must honor.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{GenreId, PageRequest};

use super::search::search_text;
use super::{SearchFilters, SortOrder, Story, StoryStatus};

/// Which stories a query may surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only published stories.
    Published,
    /// Published stories and drafts.
    All,
}

/// A fully specified story query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryQuery {
    pub visibility: Visibility,
    /// Case-insensitive literal substring of title or description.
    pub text: Option<String>,
    pub status: Option<StoryStatus>,
    pub country: Option<String>,
    /// Inclusive lower bound on release year.
    pub year_from: Option<i32>,
    /// Inclusive upper bound on release year.
    pub year_to: Option<i32>,
    /// Story must carry this genre.
    pub genre_id: Option<GenreId>,
    /// Story must carry at least one of these genre slugs.
    pub genre_slugs: Vec<String>,
    pub sort: SortOrder,
    pub page: PageRequest,
}

impl StoryQuery {
    fn base(visibility: Visibility, page: PageRequest) -> Self {
        Self {
            visibility,
            text: None,
            status: None,
            country: None,
            year_from: None,
            year_to: None,
            genre_id: None,
            genre_slugs: Vec::new(),
            sort: SortOrder::Latest,
            page,
        }
    }

    /// All stories, newest update first.
    pub fn listing(page: PageRequest, include_unpublished: bool) -> Self {
        let visibility = if include_unpublished {
            Visibility::All
        } else {
            Visibility::Published
        };
        Self::base(visibility, page)
    }

    /// Published stories tagged with one genre.
    pub fn by_genre(genre_id: GenreId, page: PageRequest) -> Self {
        Self {
            genre_id: Some(genre_id),
            ..Self::base(Visibility::Published, page)
        }
    }

    /// A single page of the most recently updated published stories.
    pub fn latest(limit: PageRequest) -> Self {
        Self::base(Visibility::Published, limit)
    }

    /// A single page of the most viewed published stories.
    pub fn hot(limit: PageRequest) -> Self {
        Self {
            sort: SortOrder::Popular,
            ..Self::base(Visibility::Published, limit)
        }
    }

    /// Substring search over published stories.
    pub fn text_search(text: &str, page: PageRequest) -> Self {
        Self {
            text: search_text(Some(text.to_string())),
            ..Self::base(Visibility::Published, page)
        }
    }

    /// Substring search including drafts.
    pub fn admin_search(text: &str, page: PageRequest) -> Self {
        Self {
            text: search_text(Some(text.to_string())),
            ..Self::base(Visibility::All, page)
        }
    }

    /// Multi-filter search over published stories.
    pub fn advanced(filters: SearchFilters, page: PageRequest) -> Self {
        Self {
            text: filters.text,
            status: filters.status,
            country: filters.country,
            year_from: filters.year_from,
            year_to: filters.year_to,
            genre_slugs: filters.genre_slugs,
            sort: filters.sort,
            ..Self::base(Visibility::Published, page)
        }
    }

    /// Returns true if the story satisfies every specified predicate.
    pub fn matches(&self, story: &Story) -> bool {
        if self.visibility == Visibility::Published && !story.is_published {
            return false;
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let in_title = story.title.to_lowercase().contains(&needle);
            let in_description = story
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(status) = self.status {
            if story.status != status {
                return false;
            }
        }

        if let Some(country) = &self.country {
            if story.country.as_deref() != Some(country.as_str()) {
                return false;
            }
        }

        if let Some(from) = self.year_from {
            if !story.release_year.is_some_and(|y| y >= from) {
                return false;
            }
        }

        if let Some(to) = self.year_to {
            if !story.release_year.is_some_and(|y| y <= to) {
                return false;
            }
        }

        if let Some(genre_id) = &self.genre_id {
            if !story.genres.iter().any(|g| &g.id == genre_id) {
                return false;
            }
        }

        if !self.genre_slugs.is_empty()
            && !self.genre_slugs.iter().any(|slug| story.has_genre_slug(slug))
        {
            return false;
        }

        true
    }

    /// Orders two stories according to `sort`, breaking ties by id so
    /// pagination is stable.
    pub fn compare(&self, a: &Story, b: &Story) -> Ordering {
        let primary = match self.sort {
            SortOrder::Latest => b.updated_at.cmp(&a.updated_at),
            SortOrder::Popular => b.view_count.cmp(&a.view_count),
            SortOrder::Name => a.title.cmp(&b.title),
            SortOrder::Rating => match (a.rating, b.rating) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortOrder::Oldest => a.created_at.cmp(&b.created_at),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}
