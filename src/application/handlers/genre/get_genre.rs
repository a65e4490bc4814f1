//! GetGenreHandler - Query handler for a single genre.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Genre};
use crate::domain::foundation::GenreId;
use crate::ports::GenreRepository;

/// Query to fetch a genre by id.
#[derive(Debug, Clone)]
pub struct GetGenreQuery {
    pub genre_id: GenreId,
}

/// Handler for fetching a genre.
pub struct GetGenreHandler {
    repository: Arc<dyn GenreRepository>,
}

impl GetGenreHandler {
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetGenreQuery) -> Result<Genre, CatalogError> {
        self.repository
            .find_by_id(&query.genre_id)
            .await?
            .ok_or_else(|| CatalogError::genre_not_found(query.genre_id))
    }
}
