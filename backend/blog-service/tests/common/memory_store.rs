//! In-memory BlogStore for Integration Tests
//!
//! Holds posts and comments in plain vectors and applies the same
//! published/active filtering and ordering as the PostgreSQL store, so the
//! handlers can be exercised without a database.

use async_trait::async_trait;
use blog_service::db::BlogStore;
use blog_service::models::{Comment, NewComment, Post, PostStatus};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Tables {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    next_comment_id: i64,
}

/// Shared handle; clones see the same tables
#[derive(Clone, Default)]
pub struct MemoryBlogStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_post(&self, post: Post) {
        self.tables.lock().unwrap().posts.push(post);
    }

    pub fn add_comment(&self, comment: Comment) {
        let mut tables = self.tables.lock().unwrap();
        tables.next_comment_id = tables.next_comment_id.max(comment.id);
        tables.comments.push(comment);
    }

    /// Every stored comment for a post, active or not
    pub fn stored_comments(&self, post_id: i64) -> Vec<Comment> {
        self.tables
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    fn published(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .tables
            .lock()
            .unwrap()
            .posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.publish.cmp(&a.publish).then(b.id.cmp(&a.id)));
        posts
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn count_published_posts(&self) -> Result<i64, sqlx::Error> {
        Ok(self.published().len() as i64)
    }

    async fn list_published_posts(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        Ok(self
            .published()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_published_post(&self, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
        Ok(self.published().into_iter().find(|p| p.id == post_id))
    }

    async fn find_published_posts_by_slug_between(
        &self,
        slug: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let mut posts: Vec<Post> = self
            .published()
            .into_iter()
            .filter(|p| p.slug == slug && p.publish >= day_start && p.publish < day_end)
            .collect();
        posts.sort_by_key(|p| p.id);
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn list_active_comments(&self, post_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
        let mut comments: Vec<Comment> = self
            .stored_comments(post_id)
            .into_iter()
            .filter(|c| c.active)
            .collect();
        comments.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn count_active_comments(&self, post_id: i64) -> Result<i64, sqlx::Error> {
        Ok(self.list_active_comments(post_id).await?.len() as i64)
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<Comment, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_comment_id += 1;
        let now = Utc::now();
        let stored = Comment {
            id: tables.next_comment_id,
            post_id: comment.post_id,
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
            created: now,
            updated: now,
            active: true,
        };
        tables.comments.push(stored.clone());
        Ok(stored)
    }
}
