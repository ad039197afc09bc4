/// Comment service - handles comment submission on published posts
use crate::db::BlogStore;
use crate::error::Result;
use crate::forms::{CommentForm, FormState};
use crate::metrics::blog::COMMENTS_SUBMITTED_TOTAL;
use crate::models::{Comment, NewComment, Post};
use crate::services::posts::PostService;
use serde::Serialize;
use std::sync::Arc;

/// Result of a comment submission.
///
/// `comment` is present only when the form was valid and the comment stored;
/// otherwise `form` carries the field errors for re-display.
#[derive(Debug, Clone, Serialize)]
pub struct CommentSubmission {
    pub post: Post,
    pub form: FormState<CommentForm>,
    pub comment: Option<Comment>,
}

pub struct CommentService {
    store: Arc<dyn BlogStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    /// Validate `data` and, if valid, store it as an active comment on the post
    pub async fn submit_comment(&self, post_id: i64, data: CommentForm) -> Result<CommentSubmission> {
        let post = PostService::new(self.store.clone())
            .get_published(post_id)
            .await?;

        let form = FormState::bind(data);
        if !form.is_valid() {
            tracing::debug!(
                post_id,
                fields = ?form.errors.keys().collect::<Vec<_>>(),
                "comment rejected by validation"
            );
            COMMENTS_SUBMITTED_TOTAL.with_label_values(&["invalid"]).inc();
            return Ok(CommentSubmission {
                post,
                form,
                comment: None,
            });
        }

        let new_comment = NewComment {
            post_id: post.id,
            name: form.data.name.clone(),
            email: form.data.email.clone(),
            body: form.data.body.clone(),
        };
        let comment = self.store.insert_comment(&new_comment).await?;

        tracing::info!(post_id, comment_id = comment.id, "comment created");
        COMMENTS_SUBMITTED_TOTAL.with_label_values(&["created"]).inc();

        Ok(CommentSubmission {
            post,
            form,
            comment: Some(comment),
        })
    }

    /// Count active comments for a post
    pub async fn count_active_comments(&self, post_id: i64) -> Result<i64> {
        Ok(self.store.count_active_comments(post_id).await?)
    }
}
