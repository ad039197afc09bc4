/// Share handlers - "recommend this post" email form
use crate::error::{AppError, Result};
use crate::forms::EmailPostForm;
use crate::render::{render, SHARE_TEMPLATE};
use crate::services::ShareService;
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

fn share_service(state: &AppState) -> ShareService {
    ShareService::new(
        state.store.clone(),
        state.mailer.clone(),
        state.blog.share_from_address.clone(),
    )
}

/// Configured public base URL, else the scheme and host the client used
fn base_url(state: &AppState, req: &HttpRequest) -> String {
    if let Some(url) = &state.blog.base_url {
        return url.clone();
    }
    let conn = req.connection_info();
    format!("{}://{}", conn.scheme(), conn.host())
}

/// Show an empty share form
/// GET /blog/{post_id}/share
pub async fn share_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let outcome = share_service(&state)
        .share_post(post_id.into_inner(), None, &base_url(&state, &req))
        .await?;

    render(state.renderer.as_ref(), SHARE_TEMPLATE, &outcome)
}

/// Validate the share form and send the recommendation
/// POST /blog/{post_id}/share
pub async fn share_submit(
    req: HttpRequest,
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    form: web::Form<EmailPostForm>,
) -> Result<HttpResponse> {
    let outcome = share_service(&state)
        .share_post(
            post_id.into_inner(),
            Some(form.into_inner()),
            &base_url(&state, &req),
        )
        .await?;

    render(state.renderer.as_ref(), SHARE_TEMPLATE, &outcome)
}

/// Any method other than GET or POST on the share endpoint
pub async fn share_method_not_allowed() -> Result<HttpResponse> {
    Err(AppError::MethodNotAllowed { allow: "GET, POST" })
}
