#![allow(dead_code)]

pub mod memory_store;

use async_trait::async_trait;
use blog_service::config::BlogConfig;
use blog_service::models::{Comment, Post, PostStatus};
use blog_service::render::JsonRenderer;
use blog_service::services::Mailer;
use blog_service::AppState;
use chrono::{DateTime, TimeZone, Utc};
use memory_store::MemoryBlogStore;
use mockall::mock;
use std::sync::Arc;

pub const SENDER: &str = "editor@blog.test";

mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_mail(
            &self,
            subject: &str,
            body: &str,
            from: &str,
            to: &[String],
        ) -> blog_service::Result<()>;
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn post(id: i64, slug: &str, publish: DateTime<Utc>, status: PostStatus) -> Post {
    Post {
        id,
        title: format!("Post {}", id),
        slug: slug.to_string(),
        body: format!("Body of post {}", id),
        author_id: 1,
        publish,
        created: publish,
        updated: publish,
        status,
    }
}

pub fn published(id: i64, slug: &str, publish: DateTime<Utc>) -> Post {
    post(id, slug, publish, PostStatus::Published)
}

pub fn draft(id: i64, slug: &str, publish: DateTime<Utc>) -> Post {
    post(id, slug, publish, PostStatus::Draft)
}

pub fn comment(id: i64, post_id: i64, created: DateTime<Utc>, active: bool) -> Comment {
    Comment {
        id,
        post_id,
        name: format!("Reader {}", id),
        email: format!("reader{}@example.com", id),
        body: format!("Comment {}", id),
        created,
        updated: created,
        active,
    }
}

/// Handler state over `store` with a mailer that must not be called
pub fn state(store: &MemoryBlogStore) -> AppState {
    let mut mailer = MockMailer::new();
    mailer.expect_send_mail().never();
    state_with_mailer(store, mailer)
}

pub fn state_with_mailer(store: &MemoryBlogStore, mailer: MockMailer) -> AppState {
    AppState {
        store: Arc::new(store.clone()),
        mailer: Arc::new(mailer),
        renderer: Arc::new(JsonRenderer),
        blog: BlogConfig {
            posts_per_page: 2,
            share_from_address: SENDER.to_string(),
            base_url: None,
        },
    }
}
