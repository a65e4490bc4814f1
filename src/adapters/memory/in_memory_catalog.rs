//! In-memory catalog store.
//!
//! Implements every catalog port over plain collections so handlers can be
//! exercised without PostgreSQL. Query semantics come straight from
//! [`StoryQuery::matches`] and [`StoryQuery::compare`], which makes this
//! adapter the reference the SQL adapter is checked against.
//!
//! Not intended for production: there is no durability and every call takes
//! a single store-wide lock.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::catalog::{Genre, Story, StoryList, StoryQuery};
use crate::domain::foundation::{DomainError, ErrorCode, GenreId, StoryId, Timestamp, UserId};
use crate::domain::rating::{RatingAggregate, StoryRating};
use crate::ports::{GenreRepository, StoryRatingRepository, StoryReader, StoryRepository};

#[derive(Default)]
struct State {
    /// Stories without their `genres` field; genres are hydrated on read.
    stories: HashMap<StoryId, Story>,
    genres: HashMap<GenreId, Genre>,
    story_genres: BTreeSet<(StoryId, GenreId)>,
    ratings: HashMap<(UserId, StoryId), StoryRating>,
}

impl State {
    fn hydrate(&self, story: &Story) -> Story {
        let mut genres: Vec<Genre> = self
            .story_genres
            .range((story.id, GenreId::from_uuid(uuid::Uuid::nil()))..)
            .take_while(|(sid, _)| sid == &story.id)
            .filter_map(|(_, gid)| self.genres.get(gid).cloned())
            .collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));

        let mut hydrated = story.clone();
        hydrated.genres = genres;
        hydrated
    }
}

/// In-memory implementation of the catalog store ports.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: RwLock<State>,
    fail_cached_rating_updates: AtomicBool,
}

impl InMemoryCatalog {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding and inspection helpers ===

    /// Inserts or replaces a story; genres on the story are stored and attached.
    pub async fn insert_story(&self, story: Story) {
        let mut state = self.state.write().await;
        for genre in &story.genres {
            state.genres.insert(genre.id, genre.clone());
            state.story_genres.insert((story.id, genre.id));
        }
        let mut stored = story;
        stored.genres = Vec::new();
        state.stories.insert(stored.id, stored);
    }

    /// Inserts or replaces a genre.
    pub async fn insert_genre(&self, genre: Genre) {
        self.state.write().await.genres.insert(genre.id, genre);
    }

    /// Returns the story as currently stored, genres attached.
    pub async fn story(&self, id: &StoryId) -> Option<Story> {
        let state = self.state.read().await;
        state.stories.get(id).map(|s| state.hydrate(s))
    }

    /// Number of rating rows for a story.
    pub async fn rating_rows_for(&self, story_id: &StoryId) -> usize {
        self.state
            .read()
            .await
            .ratings
            .keys()
            .filter(|(_, sid)| sid == story_id)
            .count()
    }

    /// Makes subsequent cached-rating writes fail, simulating an unreachable
    /// store after the rating write itself has gone through.
    pub fn fail_cached_rating_updates(&self, fail: bool) {
        self.fail_cached_rating_updates.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoryReader for InMemoryCatalog {
    async fn query(&self, query: &StoryQuery) -> Result<StoryList, DomainError> {
        let state = self.state.read().await;

        let mut matching: Vec<Story> = state
            .stories
            .values()
            .map(|s| state.hydrate(s))
            .filter(|s| query.matches(s))
            .collect();
        matching.sort_by(|a, b| query.compare(a, b));

        let total = matching.len() as u64;
        let items: Vec<Story> = matching
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit() as usize)
            .collect();

        Ok(StoryList::new(items, total, &query.page))
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Story>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .stories
            .values()
            .find(|s| s.slug == slug && s.is_published)
            .map(|s| state.hydrate(s)))
    }
}

#[async_trait]
impl StoryRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError> {
        Ok(self.story(id).await)
    }

    async fn exists(&self, id: &StoryId) -> Result<bool, DomainError> {
        Ok(self.state.read().await.stories.contains_key(id))
    }

    async fn list_ids(&self) -> Result<Vec<StoryId>, DomainError> {
        let mut ids: Vec<StoryId> = self.state.read().await.stories.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }

    async fn replace_genres(
        &self,
        story_id: &StoryId,
        genre_ids: &[GenreId],
    ) -> Result<Vec<Genre>, DomainError> {
        let mut state = self.state.write().await;
        if !state.stories.contains_key(story_id) {
            return Err(DomainError::new(
                ErrorCode::StoryNotFound,
                format!("Story not found: {}", story_id),
            ));
        }

        let resolved: BTreeSet<GenreId> = genre_ids
            .iter()
            .filter(|id| state.genres.contains_key(id))
            .copied()
            .collect();

        state.story_genres.retain(|(sid, _)| sid != story_id);
        for genre_id in &resolved {
            state.story_genres.insert((*story_id, *genre_id));
        }

        let story = state.stories.get(story_id).cloned();
        Ok(story.map(|s| state.hydrate(&s).genres).unwrap_or_default())
    }

    async fn update_cached_rating(
        &self,
        story_id: &StoryId,
        aggregate: &RatingAggregate,
    ) -> Result<(), DomainError> {
        if self.fail_cached_rating_updates.load(Ordering::SeqCst) {
            return Err(DomainError::database("Simulated store outage"));
        }
        let mut state = self.state.write().await;
        if let Some(story) = state.stories.get_mut(story_id) {
            story.apply_rating(aggregate);
        }
        Ok(())
    }

    async fn increment_view_count(&self, story_id: &StoryId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.stories.get_mut(story_id) {
            Some(story) => {
                story.view_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl GenreRepository for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Genre>, DomainError> {
        let mut genres: Vec<Genre> = self.state.read().await.genres.values().cloned().collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, DomainError> {
        Ok(self.state.read().await.genres.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[GenreId]) -> Result<Vec<Genre>, DomainError> {
        let state = self.state.read().await;
        let unique: BTreeSet<&GenreId> = ids.iter().collect();
        Ok(unique
            .into_iter()
            .filter_map(|id| state.genres.get(id).cloned())
            .collect())
    }

    async fn save(&self, genre: &Genre) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.genres.contains_key(&genre.id) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Genre already exists: {}", genre.id),
            ));
        }
        state.genres.insert(genre.id, genre.clone());
        Ok(())
    }

    async fn update(&self, genre: &Genre) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.genres.get_mut(&genre.id) {
            Some(existing) => {
                *existing = genre.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::GenreNotFound,
                format!("Genre not found: {}", genre.id),
            )),
        }
    }

    async fn delete(&self, id: &GenreId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        state.story_genres.retain(|(_, gid)| gid != id);
        Ok(state.genres.remove(id).is_some())
    }
}

#[async_trait]
impl StoryRatingRepository for InMemoryCatalog {
    async fn upsert(&self, rating: &StoryRating) -> Result<StoryRating, DomainError> {
        let mut state = self.state.write().await;
        let key = (rating.user_id, rating.story_id);
        let stored = match state.ratings.get(&key) {
            Some(existing) => StoryRating {
                id: existing.id,
                created_at: existing.created_at,
                score: rating.score,
                updated_at: Timestamp::now(),
                ..existing.clone()
            },
            None => rating.clone(),
        };
        state.ratings.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_user_and_story(
        &self,
        user_id: &UserId,
        story_id: &StoryId,
    ) -> Result<Option<StoryRating>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .ratings
            .get(&(*user_id, *story_id))
            .cloned())
    }

    async fn delete_by_user_and_story(
        &self,
        user_id: &UserId,
        story_id: &StoryId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .state
            .write()
            .await
            .ratings
            .remove(&(*user_id, *story_id))
            .is_some())
    }

    async fn aggregate_for_story(&self, story_id: &StoryId) -> Result<RatingAggregate, DomainError> {
        let state = self.state.read().await;
        let scores: Vec<u8> = state
            .ratings
            .values()
            .filter(|r| &r.story_id == story_id)
            .map(|r| r.score.value())
            .collect();
        Ok(RatingAggregate::from_scores(&scores))
    }
}
