use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::{
    domain::{OrganizationId, Role, UserId},
    session::Authenticated,
    tenant::TenantContext,
    AppState,
};

/// Response for the current principal.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: UserId,
    pub role: Role,
    pub organization_id: Option<OrganizationId>,
    /// The organization this request resolved to. `None` for platform admins.
    pub tenant_id: Option<OrganizationId>,
}

/// GET /api/me — The authenticated principal as seen by this tenant.
pub async fn show(
    Authenticated(principal): Authenticated,
    tenant: TenantContext,
) -> Json<MeResponse> {
    Json(MeResponse {
        id: principal.id,
        role: principal.role,
        organization_id: principal.organization_id,
        tenant_id: tenant.organization_id(),
    })
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/me", get(show))
}
