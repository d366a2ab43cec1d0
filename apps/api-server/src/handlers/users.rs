//! User lookup handlers.

use actix_web::{HttpResponse, web};

use quill_core::DomainError;
use quill_shared::dto::UserResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    let users: Vec<UserResponse> = users.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let user = state.users.find_by_id(id).await?.ok_or(DomainError::NotFound {
        entity_type: "user",
        id,
    })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
