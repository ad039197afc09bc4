/// Post handlers - listing and detail pages
use crate::error::Result;
use crate::models::Post;
use crate::render::{render, DETAIL_TEMPLATE, LIST_TEMPLATE};
use crate::services::{Page, PostService};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

/// Listing query parameters; `page` is kept raw so bad input can fall back
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListContext {
    posts: Page<Post>,
}

/// List published posts
/// GET /blog?page={n}
pub async fn post_list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new(state.store.clone());
    let posts = service
        .list_published(query.page.as_deref(), state.blog.posts_per_page)
        .await?;

    render(state.renderer.as_ref(), LIST_TEMPLATE, &ListContext { posts })
}

/// Show a published post with its active comments
/// GET /blog/{year}/{month}/{day}/{slug}
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32, u32, String)>,
) -> Result<HttpResponse> {
    let (year, month, day, slug) = path.into_inner();
    let service = PostService::new(state.store.clone());
    let detail = service.published_detail(year, month, day, &slug).await?;

    render(state.renderer.as_ref(), DETAIL_TEMPLATE, &detail)
}
