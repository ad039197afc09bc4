//! Integration Tests: Post Share
//!
//! Coverage:
//! - GET presents an unbound form and sends nothing
//! - Invalid POST sends nothing and reports field errors
//! - Valid POST sends exactly one email with the absolute post link
//! - Mail transport failure surfaces as a server error
//! - Draft posts are 404, unsupported methods are 405

mod common;

use actix_web::{http::header, http::StatusCode, test, web, App};
use blog_service::{routes, AppError};
use common::memory_store::MemoryBlogStore;
use common::{at, draft, published, state, state_with_mailer, MockMailer, SENDER};
use serde_json::Value;

fn store_with_post() -> MemoryBlogStore {
    let store = MemoryBlogStore::new();
    store.add_post(published(7, "ownership", at(2024, 5, 1, 9)));
    store
}

fn share_request(post_id: i64, to: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&format!("/blog/{}/share", post_id))
        .insert_header((header::HOST, "blog.test"))
        .set_form([
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("to", to),
            ("comments", "Worth a read"),
        ])
}

#[actix_web::test]
async fn get_shows_unbound_form() {
    let store = store_with_post();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(&store)))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/blog/7/share").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["template"], "blog/post/share");
    let context = &body["context"];
    assert_eq!(context["post"]["id"], 7);
    assert_eq!(context["sent"], false);
    assert_eq!(context["form"]["is_bound"], false);
    assert!(context["form"]["errors"].as_object().unwrap().is_empty());
}

#[actix_web::test]
async fn invalid_recipient_sends_nothing() {
    let store = store_with_post();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(&store)))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, share_request(7, "nobody").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let context = &body["context"];
    assert_eq!(context["sent"], false);
    assert_eq!(context["form"]["is_bound"], true);
    assert_eq!(
        context["form"]["errors"]["to"][0],
        "Enter a valid email address."
    );
}

#[actix_web::test]
async fn valid_form_sends_one_recommendation() {
    let store = store_with_post();
    let mut mailer = MockMailer::new();
    mailer
        .expect_send_mail()
        .withf(|subject, body, from, to| {
            subject == "Ada recommends you read Post 7"
                && body.contains("http://blog.test/blog/2024/5/1/ownership")
                && body.ends_with("Ada's comments: Worth a read")
                && from == SENDER
                && to.len() == 1
                && to[0] == "bob@example.com"
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with_mailer(&store, mailer)))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, share_request(7, "bob@example.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["context"]["sent"], true);
    assert_eq!(body["context"]["form"]["data"]["to"], "bob@example.com");
}

#[actix_web::test]
async fn configured_base_url_overrides_host_header() {
    let store = store_with_post();
    let mut mailer = MockMailer::new();
    mailer
        .expect_send_mail()
        .withf(|_, body, _, _| {
            body.contains("https://blog.example.com/blog/2024/5/1/ownership")
                && !body.contains("blog.test")
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));

    let mut app_state = state_with_mailer(&store, mailer);
    app_state.blog.base_url = Some("https://blog.example.com".to_string());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, share_request(7, "bob@example.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn mail_failure_is_server_error() {
    let store = store_with_post();
    let mut mailer = MockMailer::new();
    mailer
        .expect_send_mail()
        .times(1)
        .returning(|_, _, _, _| Err(AppError::Email("connection refused".into())));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with_mailer(&store, mailer)))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, share_request(7, "bob@example.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn draft_post_cannot_be_shared() {
    let store = store_with_post();
    store.add_post(draft(8, "unfinished", at(2024, 5, 2, 9)));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(&store)))
            .configure(routes::configure),
    )
    .await;

    let get = test::TestRequest::get().uri("/blog/8/share").to_request();
    assert_eq!(
        test::call_service(&app, get).await.status(),
        StatusCode::NOT_FOUND
    );

    let post = share_request(8, "bob@example.com").to_request();
    assert_eq!(
        test::call_service(&app, post).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn other_methods_are_not_allowed() {
    let store = store_with_post();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(&store)))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::put().uri("/blog/7/share").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "GET, POST");
}
