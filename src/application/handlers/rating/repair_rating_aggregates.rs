//! RepairRatingAggregatesHandler - Recomputes every story's cached rating.

use std::sync::Arc;

use crate::domain::foundation::StoryId;
use crate::domain::rating::RatingError;
use crate::ports::StoryRepository;

use super::{AggregateRefresh, RatingAggregateRefresher};

/// Summary of a repair run.
#[derive(Debug, Clone, Default)]
pub struct RepairReport {
    pub refreshed: usize,
    /// Stories whose cache could not be refreshed, with the reason.
    pub failed: Vec<(StoryId, String)>,
}

impl RepairReport {
    pub fn total(&self) -> usize {
        self.refreshed + self.failed.len()
    }
}

/// Handler that closes any staleness left by failed or out-of-order
/// refreshes.
///
/// A single story's failure does not stop the run.
pub struct RepairRatingAggregatesHandler {
    stories: Arc<dyn StoryRepository>,
    refresher: RatingAggregateRefresher,
}

impl RepairRatingAggregatesHandler {
    pub fn new(stories: Arc<dyn StoryRepository>, refresher: RatingAggregateRefresher) -> Self {
        Self { stories, refresher }
    }

    pub async fn handle(&self) -> Result<RepairReport, RatingError> {
        let ids = self.stories.list_ids().await?;
        let mut report = RepairReport::default();

        for story_id in ids {
            match self.refresher.refresh(&story_id).await {
                AggregateRefresh::Refreshed(_) => report.refreshed += 1,
                AggregateRefresh::Failed { reason } => report.failed.push((story_id, reason)),
            }
        }

        tracing::info!(
            refreshed = report.refreshed,
            failed = report.failed.len(),
            "Rating aggregate repair finished"
        );

        Ok(report)
    }
}
