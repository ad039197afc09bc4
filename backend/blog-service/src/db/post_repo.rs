use crate::models::Post;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

/// Count published posts
pub async fn count_published_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE status = 'published'")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Fetch published posts, newest first
pub async fn find_published_posts(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, body, author_id, publish, created, updated, status
        FROM posts
        WHERE status = 'published'
        ORDER BY publish DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a published post by ID
pub async fn find_published_post_by_id(
    pool: &PgPool,
    post_id: i64,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, body, author_id, publish, created, updated, status
        FROM posts
        WHERE id = $1 AND status = 'published'
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Find published posts with `slug` published within `[day_start, day_end)`
pub async fn find_published_posts_by_slug_between(
    pool: &PgPool,
    slug: &str,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, body, author_id, publish, created, updated, status
        FROM posts
        WHERE slug = $1
          AND publish >= $2
          AND publish < $3
          AND status = 'published'
        ORDER BY id
        LIMIT $4
        "#,
    )
    .bind(slug)
    .bind(day_start)
    .bind(day_end)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}
