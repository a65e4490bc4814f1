//! Maintenance binary: applies migrations and repairs cached ratings.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use story_catalog::adapters::{PostgresStoryRatingRepository, PostgresStoryRepository};
use story_catalog::application::{RatingAggregateRefresher, RepairRatingAggregatesHandler};
use story_catalog::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config)?;

    info!(environment = ?config.server.environment, "Story catalog maintenance starting");

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations applied");
    }

    if config.catalog.repair_on_start {
        let stories = Arc::new(PostgresStoryRepository::new(pool.clone()));
        let ratings = Arc::new(PostgresStoryRatingRepository::new(pool.clone()));
        let refresher = RatingAggregateRefresher::new(ratings, stories.clone());

        let report = RepairRatingAggregatesHandler::new(stories, refresher)
            .handle()
            .await?;

        for (story_id, reason) in &report.failed {
            tracing::error!(story_id = %story_id, reason = %reason, "Story rating left stale");
        }
        info!(
            stories = report.total(),
            refreshed = report.refreshed,
            "Cached ratings repaired"
        );
    }

    pool.close().await;
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    if config.server.json_logs() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Ok(())
}
