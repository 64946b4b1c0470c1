//! Post handlers - one HTTP verb per repository operation.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, PostChanges, PostId};
use quill_shared::MessageResponse;
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const NO_POSTS: &str = "No posts found";
const POST_NOT_FOUND: &str = "Post not found";
const POST_DELETED: &str = "Post deleted";

/// GET /api/posts
///
/// An empty collection answers 404 rather than `200 []`; existing clients
/// rely on it.
pub async fn get_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await.map_err(AppError::read_failed)?;

    if posts.is_empty() {
        return Err(AppError::not_found(NO_POSTS));
    }

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let fields = NewPost {
        title: req.title,
        content: req.content,
        author: req.author,
        tags: req.tags.unwrap_or_default(),
    };

    let post = state
        .posts
        .create(fields)
        .await
        .map_err(AppError::write_failed)?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id}
pub async fn get_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());

    let post = state
        .posts
        .find_by_id(&id)
        .await
        .map_err(AppError::read_failed)?
        .ok_or_else(|| AppError::not_found(POST_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
///
/// Only fields present with a value are written. A field sent as `null` is
/// treated like an omitted one and keeps its stored value; it is not cleared.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
        author: req.author,
        tags: req.tags,
        views: req.views,
    };

    let post = state
        .posts
        .update_by_id(&id, changes)
        .await
        .map_err(AppError::write_failed)?
        .ok_or_else(|| AppError::not_found(POST_NOT_FOUND))?;

    tracing::info!(post_id = %post.id, "Post updated");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());

    state
        .posts
        .delete_by_id(&id)
        .await
        .map_err(AppError::read_failed)?
        .ok_or_else(|| AppError::not_found(POST_NOT_FOUND))?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new(POST_DELETED)))
}
