//! Session identity extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Authenticated user identity extractor.
///
/// Resolves the session cookie against the session store. Use this in
/// handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user_id)
/// }
/// ```
/// Requests without a live session are rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: i64,
}

fn resolve_identity(req: &HttpRequest) -> Option<Identity> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return None;
    };

    let cookie = req.cookie(SESSION_COOKIE)?;
    let user_id = state.sessions.resolve(cookie.value())?;

    Some(Identity { user_id })
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_identity(req).ok_or(AppError::Unauthenticated))
    }
}

/// Optional identity extractor - resolves to `None` instead of failing.
///
/// Lets handlers order existence checks ahead of authentication, so a
/// missing resource 404s no matter who is asking.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalIdentity(resolve_identity(req))))
    }
}
