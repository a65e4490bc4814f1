//! UpdateGenreHandler - Command handler for renaming genres.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Genre};
use crate::domain::foundation::{ErrorCode, GenreId};
use crate::ports::GenreRepository;

/// Command to rename a genre.
///
/// `description: None` keeps the current description.
#[derive(Debug, Clone)]
pub struct UpdateGenreCommand {
    pub genre_id: GenreId,
    pub name: String,
    pub description: Option<String>,
}

/// Handler for updating genres.
pub struct UpdateGenreHandler {
    repository: Arc<dyn GenreRepository>,
}

impl UpdateGenreHandler {
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateGenreCommand) -> Result<Genre, CatalogError> {
        let mut genre = self
            .repository
            .find_by_id(&cmd.genre_id)
            .await?
            .ok_or_else(|| CatalogError::genre_not_found(cmd.genre_id))?;

        genre.update(&cmd.name, cmd.description)?;

        self.repository.update(&genre).await.map_err(|e| match e.code {
            ErrorCode::GenreNotFound => CatalogError::genre_not_found(cmd.genre_id),
            _ => CatalogError::from(e),
        })?;

        tracing::info!(genre_id = %genre.id, slug = %genre.slug, "Genre updated");

        Ok(genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;

    async fn seeded() -> (Arc<InMemoryCatalog>, Genre) {
        let catalog = Arc::new(InMemoryCatalog::new());
        let genre = Genre::new("Sci Fi", Some("Spaceships".to_string())).unwrap();
        catalog.insert_genre(genre.clone()).await;
        (catalog, genre)
    }

    #[tokio::test]
    async fn rename_rederives_slug_and_keeps_description() {
        let (catalog, genre) = seeded().await;

        let updated = UpdateGenreHandler::new(catalog.clone())
            .handle(UpdateGenreCommand {
                genre_id: genre.id,
                name: "Science Fiction".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.slug, "science-fiction");
        assert_eq!(updated.description.as_deref(), Some("Spaceships"));
        assert_eq!(catalog.find_by_ids(&[genre.id]).await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn supplied_description_replaces_old_one() {
        let (catalog, genre) = seeded().await;

        let updated = UpdateGenreHandler::new(catalog)
            .handle(UpdateGenreCommand {
                genre_id: genre.id,
                name: "Sci Fi".to_string(),
                description: Some("Future worlds".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.description.as_deref(), Some("Future worlds"));
    }

    #[tokio::test]
    async fn missing_genre_is_not_found() {
        let id = GenreId::new();

        let err = UpdateGenreHandler::new(Arc::new(InMemoryCatalog::new()))
            .handle(UpdateGenreCommand {
                genre_id: id,
                name: "Anything".to_string(),
                description: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::GenreNotFound(id));
    }
}
