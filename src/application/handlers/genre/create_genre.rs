//! CreateGenreHandler - Command handler for new genres.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Genre};
use crate::ports::GenreRepository;

/// Command to create a genre.
#[derive(Debug, Clone)]
pub struct CreateGenreCommand {
    pub name: String,
    pub description: Option<String>,
}

/// Handler for creating genres.
pub struct CreateGenreHandler {
    repository: Arc<dyn GenreRepository>,
}

impl CreateGenreHandler {
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateGenreCommand) -> Result<Genre, CatalogError> {
        let genre = Genre::new(&cmd.name, cmd.description)?;
        self.repository.save(&genre).await?;

        tracing::info!(genre_id = %genre.id, slug = %genre.slug, "Genre created");

        Ok(genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;

    #[tokio::test]
    async fn creates_genre_with_derived_slug() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = CreateGenreHandler::new(catalog.clone());

        let genre = handler
            .handle(CreateGenreCommand {
                name: "Slice of Life".to_string(),
                description: Some("Everyday stories".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(genre.slug, "slice-of-life");
        let stored = catalog.list_all().await.unwrap();
        assert_eq!(stored, vec![genre]);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_saving() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = CreateGenreHandler::new(catalog.clone());

        let err = handler
            .handle(CreateGenreCommand {
                name: "   ".to_string(),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::ValidationFailed { ref field, .. } if field == "name"));
        assert!(catalog.list_all().await.unwrap().is_empty());
    }
}
