/// Route definitions for the blog endpoints
use crate::handlers;
use actix_web::web;

/// Mount the blog under `/blog`.
///
/// Paths are registered without trailing slashes; the server normalizes
/// incoming paths before routing.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .route("", web::get().to(handlers::post_list))
            .route(
                "/{year}/{month}/{day}/{slug}",
                web::get().to(handlers::post_detail),
            )
            .service(
                web::resource("/{post_id}/comment")
                    .route(web::post().to(handlers::post_comment))
                    .default_service(web::to(handlers::comment_method_not_allowed)),
            )
            .service(
                web::resource("/{post_id}/share")
                    .route(web::get().to(handlers::share_form))
                    .route(web::post().to(handlers::share_submit))
                    .default_service(web::to(handlers::share_method_not_allowed)),
            ),
    );
}
