/// Data models for blog-service
///
/// This module defines structures for:
/// - Post: Blog posts, visible to readers once published
/// - Comment: Reader comments on posts, gated by the `active` moderation flag
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Post publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author_id: i64,
    pub publish: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub status: PostStatus,
}

impl Post {
    /// Canonical detail path, e.g. `/blog/2024/3/7/hello-world`.
    ///
    /// Date parts come from the UTC publish date and are not zero padded.
    pub fn absolute_path(&self) -> String {
        let date = self.publish.date_naive();
        format!(
            "/blog/{}/{}/{}/{}",
            date.year(),
            date.month(),
            date.day(),
            self.slug
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub active: bool,
}

/// Insert payload for a comment; `active` and timestamps are store defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}
