//! ListGenresHandler - Query handler for every genre.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Genre};
use crate::ports::GenreRepository;

/// Handler for listing genres, ordered by name.
pub struct ListGenresHandler {
    repository: Arc<dyn GenreRepository>,
}

impl ListGenresHandler {
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Genre>, CatalogError> {
        Ok(self.repository.list_all().await?)
    }
}
