//! Genre repository port.

use async_trait::async_trait;

use crate::domain::catalog::Genre;
use crate::domain::foundation::{DomainError, GenreId};

/// Repository port for genre persistence.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// All genres ordered by name.
    async fn list_all(&self) -> Result<Vec<Genre>, DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, DomainError>;

    /// Resolves ids to genres, silently skipping unknown ids.
    async fn find_by_ids(&self, ids: &[GenreId]) -> Result<Vec<Genre>, DomainError>;

    /// Save a new genre.
    async fn save(&self, genre: &Genre) -> Result<(), DomainError>;

    /// Update name, slug and description.
    ///
    /// # Errors
    ///
    /// - `GenreNotFound` if the genre doesn't exist
    async fn update(&self, genre: &Genre) -> Result<(), DomainError>;

    /// Delete a genre, detaching it from every story.
    ///
    /// Returns `false` if it did not exist.
    async fn delete(&self, id: &GenreId) -> Result<bool, DomainError>;
}
