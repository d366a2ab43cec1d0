//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use quill_core::DomainError;
use quill_core::domain::NewPost;
use quill_shared::dto::{MessageResponse, PageQuery, PostListResponse, PostPayload, PostResponse};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Hard cap on page size so one request stays bounded.
const MAX_PER_PAGE: u64 = 100;

fn validate_payload(payload: &PostPayload) -> Result<(), AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".to_string()));
    }
    if payload.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// GET /posts?page=&per_page=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.max(1);
    let per_page = query.per_page.clamp(1, MAX_PER_PAGE);

    let page = state.posts.find_page(page, per_page).await?;

    Ok(HttpResponse::Ok().json(PostListResponse::from(page)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    validate_payload(&payload)?;

    let post = state
        .posts
        .create(NewPost {
            user_id: identity.user_id,
            title: payload.title,
            content: payload.content,
        })
        .await?;

    tracing::info!(post_id = post.id, user_id = identity.user_id, "Post created");

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// A missing post is reported before authentication is considered, so the
/// 404 does not depend on who is asking.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<i64>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let mut post = state.posts.find_by_id(id).await?.ok_or(DomainError::NotFound {
        entity_type: "post",
        id,
    })?;

    let identity = identity.0.ok_or(AppError::Unauthenticated)?;
    post.ensure_owned_by(identity.user_id, "update")?;

    let payload = body.into_inner();
    validate_payload(&payload)?;

    post.title = payload.title;
    post.content = payload.content;
    let post = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state.posts.find_by_id(id).await?.ok_or(DomainError::NotFound {
        entity_type: "post",
        id,
    })?;

    let identity = identity.0.ok_or(AppError::Unauthenticated)?;
    post.ensure_owned_by(identity.user_id, "delete")?;

    state.posts.delete(post.id).await?;

    tracing::info!(post_id = id, user_id = identity.user_id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully.")))
}
