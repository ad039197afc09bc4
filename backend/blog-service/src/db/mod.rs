/// Database access layer
///
/// This module provides:
/// - The `BlogStore` trait the services query through
/// - `PgBlogStore`, the PostgreSQL implementation
/// - Connection pooling and migrations
pub mod comment_repo;
pub mod post_repo;

use crate::config::DatabaseConfig;
use crate::models::{Comment, NewComment, Post};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Persistence operations needed by the blog handlers.
///
/// Every post-returning method only ever yields published posts and every
/// comment-returning method only ever yields active comments.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Number of published posts
    async fn count_published_posts(&self) -> Result<i64, sqlx::Error>;

    /// Published posts ordered by publish date, newest first
    async fn list_published_posts(&self, limit: i64, offset: i64)
        -> Result<Vec<Post>, sqlx::Error>;

    async fn find_published_post(&self, post_id: i64) -> Result<Option<Post>, sqlx::Error>;

    /// Published posts with `slug` whose publish time falls in `[day_start, day_end)`.
    /// At most `limit` rows are returned.
    async fn find_published_posts_by_slug_between(
        &self,
        slug: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Post>, sqlx::Error>;

    /// Active comments for a post, oldest first
    async fn list_active_comments(&self, post_id: i64) -> Result<Vec<Comment>, sqlx::Error>;

    async fn count_active_comments(&self, post_id: i64) -> Result<i64, sqlx::Error>;

    async fn insert_comment(&self, comment: &NewComment) -> Result<Comment, sqlx::Error>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgBlogStore {
    pool: PgPool,
}

impl PgBlogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogStore for PgBlogStore {
    async fn count_published_posts(&self) -> Result<i64, sqlx::Error> {
        post_repo::count_published_posts(&self.pool).await
    }

    async fn list_published_posts(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        post_repo::find_published_posts(&self.pool, limit, offset).await
    }

    async fn find_published_post(&self, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
        post_repo::find_published_post_by_id(&self.pool, post_id).await
    }

    async fn find_published_posts_by_slug_between(
        &self,
        slug: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        post_repo::find_published_posts_by_slug_between(&self.pool, slug, day_start, day_end, limit)
            .await
    }

    async fn list_active_comments(&self, post_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
        comment_repo::get_active_comments_by_post(&self.pool, post_id).await
    }

    async fn count_active_comments(&self, post_id: i64) -> Result<i64, sqlx::Error> {
        comment_repo::count_active_comments_by_post(&self.pool, post_id).await
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<Comment, sqlx::Error> {
        comment_repo::create_comment(&self.pool, comment).await
    }
}

/// Create the connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        "Database Pool Configuration: max_connections={}, min_connections={}, acquire_timeout={}s",
        config.max_connections,
        config.min_connections,
        config.acquire_timeout_secs
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}

/// Apply pending migrations from `./migrations`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
