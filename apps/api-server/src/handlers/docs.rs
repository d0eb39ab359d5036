//! Generated OpenAPI document.

use actix_web::HttpResponse;
use utoipa::OpenApi;

use summit_core::domain::{NewPost, Post, PostChanges};
use summit_shared::{ErrorResponse, MessageResponse};

use super::{health, posts};

#[derive(OpenApi)]
#[openapi(
    info(title = "Summit Social API", description = "CRUD over social-media posts"),
    paths(
        posts::create_post,
        posts::list_posts,
        posts::get_post,
        posts::update_post,
        posts::delete_post,
        health::ping,
    ),
    components(schemas(Post, NewPost, PostChanges, ErrorResponse, MessageResponse)),
    tags(
        (name = "posts", description = "Post lifecycle"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// GET /swagger/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
