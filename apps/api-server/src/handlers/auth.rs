//! Registration, login and logout handlers.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpRequest, HttpResponse, web};

use quill_core::DomainError;
use quill_core::domain::NewUser;
use quill_shared::dto::{LoginRequest, MessageResponse, RegisterRequest, UserResponse};

use crate::middleware::auth::SESSION_COOKIE;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.username.trim().is_empty() {
        return Err(AppError::Validation(
            "Username must not be empty".to_string(),
        ));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation(
            "Password must not be empty".to_string(),
        ));
    }

    // Check both halves separately so the conflict is distinguishable
    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(DomainError::Duplicate("Username already exists.".to_string()).into());
    }
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(DomainError::Duplicate("Email already exists.".to_string()).into());
    }

    // Hash password
    let password_hash = state
        .passwords
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user
    let user = state
        .users
        .create(NewUser {
            username: req.username,
            email: req.email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Unknown username and wrong password are deliberately the same error.
    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let valid = state
        .passwords
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.open(user.id);
    let cookie = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(state.sessions.ttl_seconds()))
        .finish();

    tracing::info!(user_id = user.id, "User logged in");

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("User logged in successfully")))
}

/// GET /logout
///
/// Always succeeds; logging out without a live session is a no-op.
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        state.sessions.revoke(cookie.value());
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(removal)
        .json(MessageResponse::new("User logged out successfully!")))
}
