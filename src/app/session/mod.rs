//! Session-backed principal loading.
//!
//! Sessions are issued elsewhere; this layer only reads the session cookie and
//! turns it into an optional [`Principal`] for the rest of the pipeline.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use sqlx::SqlitePool;

use crate::app::{
    db,
    domain::{Principal, SessionId},
    error::AppError,
    AppState,
};

/// The principal for this request, if any. Inserted by [`authenticate`].
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Option<Principal>);

/// A principal that must be present. Rejects anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

/// Middleware: resolve the session cookie to a principal. Never rejects;
/// a missing, malformed or expired session just yields an anonymous request.
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let principal = match jar.get(&state.config.session_cookie) {
        Some(cookie) => load_principal(&state.db, cookie.value()).await?,
        None => None,
    };

    request.extensions_mut().insert(CurrentPrincipal(principal));
    Ok(next.run(request).await)
}

async fn load_principal(pool: &SqlitePool, raw: &str) -> Result<Option<Principal>, sqlx::Error> {
    let Ok(session_id) = SessionId::from_string(raw) else {
        return Ok(None);
    };

    let Some(user) = db::sessions::find_user(pool, &session_id).await? else {
        return Ok(None);
    };

    let principal = user.principal();
    if principal.is_none() {
        tracing::warn!(user_id = user.id, role = %user.role, "session user has unknown role");
    }
    Ok(principal)
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Missing means the route was mounted outside `authenticate`.
        parts
            .extensions
            .get::<CurrentPrincipal>()
            .cloned()
            .ok_or(AppError::Internal)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentPrincipal(principal) = CurrentPrincipal::from_request_parts(parts, state).await?;
        principal.map(Authenticated).ok_or(AppError::Unauthorized)
    }
}
