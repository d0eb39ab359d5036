//! HTTP handlers and route configuration.

mod docs;
mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::AppError;

/// JSON body extraction: any parse failure is a 400 carrying the parser's
/// message. The content type is not enforced.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/ping", web::get().to(health::ping))
        .route("/posts", web::get().to(posts::list_posts))
        .route("/post", web::post().to(posts::create_post))
        .service(
            web::resource("/post/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::update_post))
                .route(web::delete().to(posts::delete_post)),
        )
        .route("/swagger/openapi.json", web::get().to(docs::openapi_json));
}
