/// Comment handlers - HTTP endpoints for comment submission
use crate::error::{AppError, Result};
use crate::forms::CommentForm;
use crate::render::{render, COMMENT_TEMPLATE};
use crate::services::CommentService;
use crate::AppState;
use actix_web::{web, HttpResponse};

/// Submit a comment on a published post
/// POST /blog/{post_id}/comment
///
/// Invalid input is not an error: the response carries the bound form with
/// its field errors and a `null` comment.
pub async fn post_comment(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    form: web::Form<CommentForm>,
) -> Result<HttpResponse> {
    let service = CommentService::new(state.store.clone());
    let submission = service
        .submit_comment(post_id.into_inner(), form.into_inner())
        .await?;

    render(state.renderer.as_ref(), COMMENT_TEMPLATE, &submission)
}

/// Any method other than POST on the comment endpoint
pub async fn comment_method_not_allowed() -> Result<HttpResponse> {
    Err(AppError::MethodNotAllowed { allow: "POST" })
}
