//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use summit_core::domain::{NewPost, Post, PostChanges, PostId};
use summit_core::error::RepoError;
use summit_shared::ErrorResponse;

use crate::middleware::error::{AppError, AppResult, POST_NOT_FOUND};
use crate::state::AppState;

/// Ids that do not parse as a storage key cannot name a post.
fn parse_id(raw: &str) -> AppResult<PostId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(POST_NOT_FOUND.to_string()))
}

/// POST /post
#[utoipa::path(
    post,
    path = "/post",
    tag = "posts",
    request_body = NewPost,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Malformed body", body = ErrorResponse),
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;

    tracing::info!(post_id = post.id, "Created post");
    Ok(HttpResponse::Created().json(post))
}

/// GET /posts
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses((status = 200, description = "Every stored post", body = Vec<Post>))
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /post/{id}
#[utoipa::path(
    get,
    path = "/post/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /post/{id} - only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/post/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    request_body = PostChanges,
    responses(
        (status = 200, description = "The updated post", body = Post),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Update failed", body = ErrorResponse),
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostChanges>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .update(id, body.into_inner())
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::NotFound(POST_NOT_FOUND.to_string()),
            other => {
                tracing::error!(post_id = id, error = %other, "Post update failed");
                AppError::Internal("Failed to update post".to_string())
            }
        })?;

    tracing::info!(post_id = id, "Updated post");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /post/{id}
#[utoipa::path(
    delete,
    path = "/post/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(id).await?;

    tracing::info!(post_id = id, "Deleted post");
    Ok(HttpResponse::NoContent().finish())
}
