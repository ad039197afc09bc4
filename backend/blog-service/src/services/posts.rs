/// Post service - published post listing and lookup
use crate::db::BlogStore;
use crate::error::{AppError, Result};
use crate::forms::{CommentForm, FormState};
use crate::metrics::blog::LISTING_PAGE_FALLBACKS_TOTAL;
use crate::models::{Comment, Post};
use crate::services::pagination::{Page, Paginator};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use std::sync::Arc;

/// A post as shown on its detail page
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub form: FormState<CommentForm>,
}

pub struct PostService {
    store: Arc<dyn BlogStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    /// List one page of published posts.
    ///
    /// `raw_page` is the untrusted query value; it never causes an error.
    pub async fn list_published(&self, raw_page: Option<&str>, per_page: u32) -> Result<Page<Post>> {
        let count = self.store.count_published_posts().await?;
        let paginator = Paginator::new(count.max(0) as u64, per_page);

        let (number, fallback) = paginator.resolve(raw_page);
        if let Some(reason) = fallback {
            tracing::debug!(
                raw_page = ?raw_page,
                served = number,
                reason = reason.as_str(),
                "listing page parameter replaced"
            );
            LISTING_PAGE_FALLBACKS_TOTAL
                .with_label_values(&[reason.as_str()])
                .inc();
        }

        let (limit, offset) = paginator.window(number);
        let posts = self.store.list_published_posts(limit, offset).await?;
        Ok(paginator.page(number, posts))
    }

    /// Get a published post by ID
    pub async fn get_published(&self, post_id: i64) -> Result<Post> {
        self.store
            .find_published_post(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))
    }

    /// Get the published post for a (year, month, day, slug) permalink together
    /// with its active comments and a fresh comment form.
    pub async fn published_detail(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<PostDetail> {
        let not_found = || AppError::NotFound(format!("post {}/{}/{}/{}", year, month, day, slug));

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(not_found)?;
        let day_start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).ok_or_else(not_found)?);
        let day_end = day_start
            .checked_add_signed(Duration::days(1))
            .ok_or_else(not_found)?;

        // Two rows are enough to tell "exactly one" from "ambiguous".
        let mut candidates = self
            .store
            .find_published_posts_by_slug_between(slug, day_start, day_end, 2)
            .await?;
        if candidates.len() > 1 {
            tracing::warn!(
                slug,
                %date,
                "multiple published posts share a permalink"
            );
            return Err(not_found());
        }
        let post = candidates.pop().ok_or_else(not_found)?;

        let comments = self.store.list_active_comments(post.id).await?;

        Ok(PostDetail {
            post,
            comments,
            form: FormState::unbound(),
        })
    }
}
