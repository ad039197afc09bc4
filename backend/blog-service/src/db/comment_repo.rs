use crate::models::{Comment, NewComment};
use sqlx::{PgPool, Row};

/// Create a new comment on a post; `active` defaults to true
pub async fn create_comment(pool: &PgPool, comment: &NewComment) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, name, email, body)
        VALUES ($1, $2, $3, $4)
        RETURNING id, post_id, name, email, body, created, updated, active
        "#,
    )
    .bind(comment.post_id)
    .bind(&comment.name)
    .bind(&comment.email)
    .bind(&comment.body)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get active comments for a post in chronological order
pub async fn get_active_comments_by_post(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, name, email, body, created, updated, active
        FROM comments
        WHERE post_id = $1 AND active = TRUE
        ORDER BY created ASC, id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Count active comments for a post
pub async fn count_active_comments_by_post(pool: &PgPool, post_id: i64) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        "SELECT COUNT(*) AS count FROM comments WHERE post_id = $1 AND active = TRUE",
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i64, _>("count"))
}
