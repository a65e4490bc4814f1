//! RecordStoryViewHandler - Command handler for the view counter.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::StoryId;
use crate::ports::StoryRepository;

/// Command to count one view of a story.
#[derive(Debug, Clone)]
pub struct RecordStoryViewCommand {
    pub story_id: StoryId,
}

/// Handler for recording a story view.
///
/// The increment is a single store-side update, so concurrent views never
/// lose counts.
pub struct RecordStoryViewHandler {
    repository: Arc<dyn StoryRepository>,
}

impl RecordStoryViewHandler {
    pub fn new(repository: Arc<dyn StoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordStoryViewCommand) -> Result<(), CatalogError> {
        if !self.repository.increment_view_count(&cmd.story_id).await? {
            return Err(CatalogError::story_not_found(cmd.story_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::domain::catalog::Story;

    #[tokio::test]
    async fn increments_view_count() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let story = Story::new("Counter", "counter");
        catalog.insert_story(story.clone()).await;
        let handler = RecordStoryViewHandler::new(catalog.clone());

        for _ in 0..3 {
            handler
                .handle(RecordStoryViewCommand { story_id: story.id })
                .await
                .unwrap();
        }

        assert_eq!(catalog.story(&story.id).await.unwrap().view_count, 3);
    }

    #[tokio::test]
    async fn missing_story_is_not_found() {
        let handler = RecordStoryViewHandler::new(Arc::new(InMemoryCatalog::new()));
        let id = StoryId::new();

        let err = handler
            .handle(RecordStoryViewCommand { story_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::StoryNotFound(id));
    }
}
