//! Tenant resolution and isolation enforcement.
//!
//! **Rule**: the tenant comes from the request's host headers, never from the
//! session. A principal may only act inside the organization it belongs to.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::ORIGIN, request::Parts, HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;

use crate::app::{
    db::{self, Organization},
    domain::{Hostname, OrganizationId, Principal},
    error::{AccessError, AppError},
    session::CurrentPrincipal,
    AppState,
};

/// The organization a request is bound to. Immutable once resolved.
///
/// Unbound only for platform admins, who operate across tenants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    organization: Option<Organization>,
}

impl TenantContext {
    pub fn bound(organization: Organization) -> Self {
        Self {
            organization: Some(organization),
        }
    }

    pub fn unbound() -> Self {
        Self { organization: None }
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }

    pub fn organization_id(&self) -> Option<OrganizationId> {
        self.organization.as_ref().map(Organization::organization_id)
    }

    /// The bound organization, or `TenantNotAuthorized` when unbound.
    pub fn require_organization(&self) -> Result<&Organization, AccessError> {
        self.organization().ok_or(AccessError::TenantNotAuthorized)
    }
}

/// Lookup from a normalized hostname to the organization of its active domain row.
#[async_trait]
pub trait DomainDirectory: Send + Sync {
    /// Exact match on `hostname` among active domain rows. The organization is
    /// returned whatever its own `is_active` flag says.
    async fn find_active_domain(&self, hostname: &Hostname) -> Result<Option<Organization>, sqlx::Error>;
}

#[async_trait]
impl DomainDirectory for SqlitePool {
    async fn find_active_domain(&self, hostname: &Hostname) -> Result<Option<Organization>, sqlx::Error> {
        db::organization_domains::find_active_organization(self, hostname).await
    }
}

/// Resolve the tenant for a request.
///
/// Platform admins bypass resolution entirely. Everyone else, anonymous
/// included, needs a hostname that maps to an active domain of an active
/// organization, and an authenticated principal must belong to it.
pub async fn resolve<D>(
    directory: &D,
    headers: &HeaderMap,
    tenant_header: &HeaderName,
    principal: Option<&Principal>,
) -> Result<TenantContext, AppError>
where
    D: DomainDirectory + ?Sized,
{
    if let Some(principal) = principal.filter(|p| p.role.is_platform_admin()) {
        tracing::debug!(user_id = %principal.id, "platform admin, tenant resolution bypassed");
        return Ok(TenantContext::unbound());
    }

    let hostname = candidate_hostname(headers, tenant_header)?;

    let organization = directory
        .find_active_domain(&hostname)
        .await?
        .filter(|org| org.is_active)
        .ok_or(AccessError::TenantNotAuthorized)?;

    let context = TenantContext::bound(organization);

    // A principal without an organization passes; only a differing one is rejected.
    if let Some(user_org) = principal.and_then(|p| p.organization_id) {
        if Some(user_org) != context.organization_id() {
            return Err(AccessError::TenantMismatch.into());
        }
    }

    tracing::debug!(
        %hostname,
        organization_id = ?context.organization_id(),
        "tenant resolved"
    );
    Ok(context)
}

/// The hostname to resolve: the override header when present and non-empty,
/// otherwise the host of `Origin`. A non-empty override never falls back.
fn candidate_hostname(headers: &HeaderMap, tenant_header: &HeaderName) -> Result<Hostname, AccessError> {
    if let Some(value) = headers.get(tenant_header) {
        let raw = String::from_utf8_lossy(value.as_bytes());
        if !raw.trim().is_empty() {
            return Hostname::new(&raw).map_err(|_| AccessError::MissingTenantContext);
        }
    }

    headers
        .get(ORIGIN)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .and_then(|origin| Hostname::from_origin(&origin))
        .ok_or(AccessError::MissingTenantContext)
}

/// Middleware: resolve the tenant and hand the context to downstream handlers.
/// Must run inside [`crate::app::session::authenticate`].
pub async fn resolve_tenant(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let context = resolve(
        &state.db,
        &parts.headers,
        &state.config.tenant_header,
        principal.as_ref(),
    )
    .await?;

    parts.extensions.insert(context);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Missing means the route was mounted outside `resolve_tenant`.
        parts
            .extensions
            .get::<TenantContext>()
            .cloned()
            .ok_or(AppError::Internal)
    }
}
