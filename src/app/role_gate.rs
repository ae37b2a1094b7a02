//! Route-level role gates. Evaluated after tenant resolution.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::app::{
    domain::{Principal, Role},
    error::{AccessError, AppError},
    session::CurrentPrincipal,
};

/// A fixed set of roles a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGate {
    /// Organization administrators: `admin` and `org_super_admin`.
    AdminTier,
    /// Platform administrators only.
    PlatformAdmin,
}

impl RoleGate {
    pub fn allows(self, role: Role) -> bool {
        match self {
            RoleGate::AdminTier => match role {
                Role::Admin | Role::OrgSuperAdmin => true,
                Role::PlatformAdmin | Role::Recruiter | Role::Candidate => false,
            },
            RoleGate::PlatformAdmin => match role {
                Role::PlatformAdmin => true,
                Role::OrgSuperAdmin | Role::Admin | Role::Recruiter | Role::Candidate => false,
            },
        }
    }
}

/// Allow the principal through `gate`. Anonymous requests never pass.
pub fn authorize(principal: Option<&Principal>, gate: RoleGate) -> Result<(), AccessError> {
    match principal {
        Some(p) if gate.allows(p.role) => Ok(()),
        _ => Err(AccessError::InsufficientRole),
    }
}

async fn gated_principal(parts: &mut Parts, gate: RoleGate) -> Result<Principal, AppError> {
    let CurrentPrincipal(principal) = CurrentPrincipal::from_request_parts(parts, &()).await?;
    authorize(principal.as_ref(), gate)?;
    principal.ok_or(AppError::Internal)
}

/// Extractor for admin-tier routes.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        gated_principal(parts, RoleGate::AdminTier).await.map(RequireAdmin)
    }
}

/// Extractor for platform-admin routes.
#[derive(Debug, Clone)]
pub struct RequirePlatformAdmin(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for RequirePlatformAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        gated_principal(parts, RoleGate::PlatformAdmin)
            .await
            .map(RequirePlatformAdmin)
    }
}
