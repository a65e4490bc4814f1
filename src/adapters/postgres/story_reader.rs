//! PostgreSQL implementation of StoryReader.
//!
//! Every `StoryQuery` is compiled into two statements sharing one WHERE
//! clause: a `COUNT(*)` for the total and a paged, ordered `SELECT`. User
//! values are always bound, never interpolated.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::catalog::{contains_pattern, SortOrder, Story, StoryList, StoryQuery, Visibility};
use crate::domain::foundation::DomainError;
use crate::ports::StoryReader;

use super::rows::{hydrate_stories, map_db_error, StoryRow, STORY_COLUMNS};

/// PostgreSQL implementation of StoryReader.
#[derive(Clone)]
pub struct PostgresStoryReader {
    pool: PgPool,
}

impl PostgresStoryReader {
    /// Creates a new PostgresStoryReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryReader for PostgresStoryReader {
    async fn query(&self, query: &StoryQuery) -> Result<StoryList, DomainError> {
        let (total,): (i64,) = build_count(query)
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("count stories", e))?;

        let rows: Vec<StoryRow> = build_select(query)
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("list stories", e))?;

        tracing::debug!(
            sort = %query.sort,
            page = query.page.page(),
            total,
            returned = rows.len(),
            "Story query executed"
        );

        let items = hydrate_stories(&self.pool, rows).await?;
        Ok(StoryList::new(items, total.max(0) as u64, &query.page))
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Story>, DomainError> {
        let row: Option<StoryRow> = sqlx::query_as(&format!(
            "SELECT {} FROM stories s WHERE s.slug = $1 AND s.is_published = TRUE",
            STORY_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("fetch story by slug", e))?;

        match row {
            Some(row) => Ok(hydrate_stories(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query construction
// ════════════════════════════════════════════════════════════════════════════

/// `SELECT COUNT(*)` over the filtered set.
pub(crate) fn build_count(query: &StoryQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM stories s WHERE TRUE ");
    push_filters(&mut qb, query);
    qb
}

/// Filtered, ordered and paged story rows.
pub(crate) fn build_select(query: &StoryQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM stories s WHERE TRUE ", STORY_COLUMNS));
    push_filters(&mut qb, query);
    qb.push("ORDER BY ");
    qb.push(order_clause(query.sort));
    qb.push(" LIMIT ");
    qb.push_bind(query.page.limit() as i64);
    qb.push(" OFFSET ");
    qb.push_bind(query.page.offset() as i64);
    qb
}

fn push_filters(qb: &mut QueryBuilder<'static, Postgres>, query: &StoryQuery) {
    if query.visibility == Visibility::Published {
        qb.push("AND s.is_published = TRUE ");
    }

    if let Some(text) = &query.text {
        let pattern = contains_pattern(text);
        qb.push("AND (s.title ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" ESCAPE '\\' OR s.description ILIKE ");
        qb.push_bind(pattern);
        qb.push(" ESCAPE '\\') ");
    }

    if let Some(status) = query.status {
        qb.push("AND s.status = ");
        qb.push_bind(status.as_str());
        qb.push(" ");
    }

    if let Some(country) = &query.country {
        qb.push("AND s.country = ");
        qb.push_bind(country.clone());
        qb.push(" ");
    }

    if let Some(from) = query.year_from {
        qb.push("AND s.release_year >= ");
        qb.push_bind(from);
        qb.push(" ");
    }

    if let Some(to) = query.year_to {
        qb.push("AND s.release_year <= ");
        qb.push_bind(to);
        qb.push(" ");
    }

    if let Some(genre_id) = &query.genre_id {
        qb.push(
            "AND EXISTS (SELECT 1 FROM story_genres sg WHERE sg.story_id = s.id AND sg.genre_id = ",
        );
        qb.push_bind(*genre_id.as_uuid());
        qb.push(") ");
    }

    if !query.genre_slugs.is_empty() {
        qb.push(
            "AND EXISTS (SELECT 1 FROM story_genres sg JOIN genres g ON g.id = sg.genre_id \
             WHERE sg.story_id = s.id AND g.slug = ANY(",
        );
        qb.push_bind(query.genre_slugs.clone());
        qb.push(")) ");
    }
}

/// ORDER BY expression per sort key; `s.id` breaks ties for stable paging.
fn order_clause(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Latest => "s.updated_at DESC, s.id ASC",
        SortOrder::Popular => "s.view_count DESC, s.id ASC",
        SortOrder::Name => "s.title ASC, s.id ASC",
        SortOrder::Rating => "s.rating DESC NULLS LAST, s.id ASC",
        SortOrder::Oldest => "s.created_at ASC, s.id ASC",
    }
}
