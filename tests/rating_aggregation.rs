//! Integration tests for rating aggregation.
//!
//! Drives the rating handlers end to end against the in-memory store and
//! checks the per-user state machine, the live aggregate, and the cached
//! rating on the story.

use proptest::prelude::*;
use std::sync::Arc;

use story_catalog::adapters::InMemoryCatalog;
use story_catalog::application::{
    AggregateRefresh, DeleteMyRatingCommand, DeleteMyRatingHandler, GetMyRatingHandler,
    GetMyRatingQuery, GetStoryRatingHandler, GetStoryRatingQuery, RateStoryCommand,
    RateStoryHandler, RatingAggregateRefresher, RepairRatingAggregatesHandler,
};
use story_catalog::domain::catalog::Story;
use story_catalog::domain::foundation::{StoryId, UserId};
use story_catalog::domain::rating::{RatingError, RatingState};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    catalog: Arc<InMemoryCatalog>,
    rate: RateStoryHandler,
    get_mine: GetMyRatingHandler,
    delete_mine: DeleteMyRatingHandler,
    aggregate: GetStoryRatingHandler,
}

impl Harness {
    fn new() -> Self {
        let catalog = Arc::new(InMemoryCatalog::new());
        Self {
            rate: RateStoryHandler::new(catalog.clone(), catalog.clone()),
            get_mine: GetMyRatingHandler::new(catalog.clone()),
            delete_mine: DeleteMyRatingHandler::new(catalog.clone(), catalog.clone()),
            aggregate: GetStoryRatingHandler::new(catalog.clone()),
            catalog,
        }
    }

    async fn story(&self) -> StoryId {
        let mut story = Story::new("Rated Story", format!("rated-{}", StoryId::new()));
        story.is_published = true;
        let id = story.id;
        self.catalog.insert_story(story).await;
        id
    }

    async fn rate(&self, user_id: UserId, story_id: StoryId, score: i32) -> Result<(), RatingError> {
        self.rate
            .handle(RateStoryCommand {
                user_id,
                story_id,
                score,
            })
            .await
            .map(|_| ())
    }

    async fn mine(&self, user_id: UserId, story_id: StoryId) -> RatingState {
        self.get_mine
            .handle(GetMyRatingQuery { user_id, story_id })
            .await
            .unwrap()
    }

    async fn delete(&self, user_id: UserId, story_id: StoryId) -> bool {
        self.delete_mine
            .handle(DeleteMyRatingCommand { user_id, story_id })
            .await
            .unwrap()
            .removed
    }

    async fn live(&self, story_id: StoryId) -> (f64, u32) {
        let aggregate = self
            .aggregate
            .handle(GetStoryRatingQuery { story_id })
            .await
            .unwrap();
        (aggregate.average(), aggregate.count())
    }

    async fn cached(&self, story_id: StoryId) -> (Option<f64>, u32) {
        let story = self.catalog.story(&story_id).await.unwrap();
        (story.rating, story.rating_count)
    }
}

// =============================================================================
// State machine
// =============================================================================

#[tokio::test]
async fn unrated_then_rated_then_rerated_then_unrated() {
    let h = Harness::new();
    let story = h.story().await;
    let user = UserId::new();

    assert_eq!(h.mine(user, story).await, RatingState::Unrated);

    h.rate(user, story, 2).await.unwrap();
    assert_eq!(h.mine(user, story).await.score().map(|s| s.value()), Some(2));

    h.rate(user, story, 4).await.unwrap();
    assert_eq!(h.mine(user, story).await.score().map(|s| s.value()), Some(4));
    assert_eq!(h.catalog.rating_rows_for(&story).await, 1);

    assert!(h.delete(user, story).await);
    assert_eq!(h.mine(user, story).await, RatingState::Unrated);

    assert!(!h.delete(user, story).await);
}

#[tokio::test]
async fn invalid_scores_leave_existing_rating_untouched() {
    let h = Harness::new();
    let story = h.story().await;
    let user = UserId::new();
    h.rate(user, story, 3).await.unwrap();

    for score in [0, 6, -3, 100] {
        let err = h.rate(user, story, score).await.unwrap_err();
        assert!(matches!(err, RatingError::ValidationFailed { .. }));
    }

    assert_eq!(h.mine(user, story).await.score().map(|s| s.value()), Some(3));
    assert_eq!(h.cached(story).await, (Some(3.0), 1));
}

#[tokio::test]
async fn rating_unknown_story_creates_nothing() {
    let h = Harness::new();
    let story = StoryId::new();

    let err = h.rate(UserId::new(), story, 5).await.unwrap_err();

    assert_eq!(err, RatingError::StoryNotFound(story));
    assert_eq!(h.catalog.rating_rows_for(&story).await, 0);
}

// =============================================================================
// Aggregates
// =============================================================================

#[tokio::test]
async fn three_four_five_averages_to_four() {
    let h = Harness::new();
    let story = h.story().await;

    for score in [3, 4, 5] {
        h.rate(UserId::new(), story, score).await.unwrap();
    }

    assert_eq!(h.live(story).await, (4.0, 3));
    assert_eq!(h.cached(story).await, (Some(4.0), 3));
}

#[tokio::test]
async fn zero_ratings_means_zero_live_and_absent_cached() {
    let h = Harness::new();
    let story = h.story().await;
    let user = UserId::new();
    h.rate(user, story, 5).await.unwrap();

    h.delete(user, story).await;

    assert_eq!(h.live(story).await, (0.0, 0));
    assert_eq!(h.cached(story).await, (None, 0));
}

#[tokio::test]
async fn failed_refresh_is_healed_by_next_rating_change() {
    let h = Harness::new();
    let story = h.story().await;

    h.catalog.fail_cached_rating_updates(true);
    let outcome = h
        .rate
        .handle(RateStoryCommand {
            user_id: UserId::new(),
            story_id: story,
            score: 1,
        })
        .await
        .unwrap();
    assert!(matches!(outcome.aggregate, AggregateRefresh::Failed { .. }));
    assert_eq!(h.cached(story).await, (None, 0));
    assert_eq!(h.live(story).await, (1.0, 1));

    h.catalog.fail_cached_rating_updates(false);
    h.rate(UserId::new(), story, 5).await.unwrap();

    assert_eq!(h.cached(story).await, (Some(3.0), 2));
}

#[tokio::test]
async fn repair_closes_staleness_window() {
    let h = Harness::new();
    let story = h.story().await;

    h.catalog.fail_cached_rating_updates(true);
    h.rate(UserId::new(), story, 2).await.unwrap();
    h.rate(UserId::new(), story, 4).await.unwrap();
    h.catalog.fail_cached_rating_updates(false);
    assert_eq!(h.cached(story).await, (None, 0));

    let repair = RepairRatingAggregatesHandler::new(
        h.catalog.clone(),
        RatingAggregateRefresher::new(h.catalog.clone(), h.catalog.clone()),
    );
    let report = repair.handle().await.unwrap();

    assert_eq!(report.refreshed, 1);
    assert_eq!(h.cached(story).await, (Some(3.0), 2));
}

// =============================================================================
// Properties
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_ratings_from_one_user_leave_one_row() {
    let h = Harness::new();
    let story = h.story().await;
    let user = UserId::new();
    let handler = Arc::new(RateStoryHandler::new(h.catalog.clone(), h.catalog.clone()));

    let scores = [1, 2, 3, 4, 5, 1, 2, 3, 4, 5];
    let mut tasks = tokio::task::JoinSet::new();
    for score in scores {
        let handler = handler.clone();
        tasks.spawn(async move {
            handler
                .handle(RateStoryCommand {
                    user_id: user,
                    story_id: story,
                    score,
                })
                .await
                .map(|result| result.rating.score.value())
        });
    }

    let mut written = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        written.push(joined.unwrap().unwrap());
    }
    assert_eq!(written.len(), scores.len());

    assert_eq!(h.catalog.rating_rows_for(&story).await, 1);

    let final_score = h.mine(user, story).await.score().map(i32::from).unwrap();
    assert!(scores.contains(&final_score));

    let (average, count) = h.live(story).await;
    assert_eq!(count, 1);
    assert_eq!(average, final_score as f64);

    let (cached, cached_count) = h.cached(story).await;
    assert_eq!(cached_count, 1);
    assert!(cached.is_some());

    // A later sequential change brings the cached value back in line.
    h.rate(user, story, 3).await.unwrap();
    assert_eq!(h.catalog.rating_rows_for(&story).await, 1);
    assert_eq!(h.live(story).await, (3.0, 1));
    assert_eq!(h.cached(story).await, (Some(3.0), 1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_valid_score_reads_back(score in 1i32..=5) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let state = rt.block_on(async {
            let h = Harness::new();
            let story = h.story().await;
            let user = UserId::new();
            h.rate(user, story, score).await.unwrap();
            h.mine(user, story).await
        });
        prop_assert_eq!(state.score().map(i32::from), Some(score));
    }

    #[test]
    fn live_aggregate_is_mean_of_current_scores(scores in prop::collection::vec(1i32..=5, 0..12)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (live, cached) = rt.block_on(async {
            let h = Harness::new();
            let story = h.story().await;
            for score in &scores {
                h.rate(UserId::new(), story, *score).await.unwrap();
            }
            (h.live(story).await, h.cached(story).await)
        });

        let count = scores.len() as u32;
        let mean = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<i32>() as f64 / scores.len() as f64
        };
        prop_assert_eq!(live.1, count);
        prop_assert!((live.0 - mean).abs() < 1e-9);
        prop_assert_eq!(cached.1, count);
        prop_assert_eq!(cached.0.is_none(), count == 0);
    }

    #[test]
    fn out_of_range_scores_are_rejected(score in prop_oneof![i32::MIN..=0, 6..=i32::MAX]) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let rows = rt.block_on(async {
            let h = Harness::new();
            let story = h.story().await;
            let result = h.rate(UserId::new(), story, score).await;
            assert!(result.is_err());
            h.catalog.rating_rows_for(&story).await
        });
        prop_assert_eq!(rows, 0);
    }
}
