use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::Error as SqlxError;

/// Terminal rejections from tenant resolution and role gating.
///
/// Messages are fixed and never say which role or tenant was involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// No usable hostname in the override header or `Origin`.
    #[error("Tenant context is required.")]
    MissingTenantContext,

    /// No active domain matched, or its organization is inactive.
    #[error("This tenant is not authorized.")]
    TenantNotAuthorized,

    /// The principal belongs to another organization.
    #[error("You do not belong to this tenant.")]
    TenantMismatch,

    #[error("You are not allowed to perform this action.")]
    InsufficientRole,
}

impl AccessError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccessError::MissingTenantContext => StatusCode::BAD_REQUEST,
            AccessError::TenantNotAuthorized
            | AccessError::TenantMismatch
            | AccessError::InsufficientRole => StatusCode::FORBIDDEN,
        }
    }
}

/// Application error type for unified error handling across the app.
#[derive(Debug)]
pub enum AppError {
    /// Tenant or role rejection (400/403).
    Access(AccessError),

    /// No authenticated principal on a route that needs one (401).
    Unauthorized,

    /// Database errors (500 Internal Server Error)
    Database(SqlxError),

    /// Generic internal errors (500 Internal Server Error)
    Internal,
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        AppError::Access(err)
    }
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Access(err) => (err.status(), err.to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Database(err) => {
                tracing::error!(%err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}
