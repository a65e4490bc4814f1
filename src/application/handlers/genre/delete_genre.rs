//! DeleteGenreHandler - Command handler for removing genres.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::GenreId;
use crate::ports::GenreRepository;

/// Command to delete a genre.
#[derive(Debug, Clone)]
pub struct DeleteGenreCommand {
    pub genre_id: GenreId,
}

/// Handler for deleting genres.
///
/// The genre is detached from every story that carried it.
pub struct DeleteGenreHandler {
    repository: Arc<dyn GenreRepository>,
}

impl DeleteGenreHandler {
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteGenreCommand) -> Result<(), CatalogError> {
        if !self.repository.delete(&cmd.genre_id).await? {
            return Err(CatalogError::genre_not_found(cmd.genre_id));
        }

        tracing::info!(genre_id = %cmd.genre_id, "Genre deleted");

        Ok(())
    }
}
