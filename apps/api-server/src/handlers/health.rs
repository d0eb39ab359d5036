//! Liveness endpoint.

use actix_web::HttpResponse;
use summit_shared::MessageResponse;

/// Liveness probe - answers without touching storage.
///
/// GET /ping
#[utoipa::path(
    get,
    path = "/ping",
    tag = "health",
    responses((status = 200, description = "Server is up", body = MessageResponse))
)]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("pong"))
}
