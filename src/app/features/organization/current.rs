use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::{db::Organization, tenant::TenantContext, AppState};

/// Public view of an organization.
#[derive(Debug, Serialize)]
pub struct OrganizationResponse {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

impl From<&Organization> for OrganizationResponse {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id,
            slug: org.slug.clone(),
            name: org.name.clone(),
        }
    }
}

/// Envelope so an unbound (platform admin) request gets `null`.
#[derive(Debug, Serialize)]
pub struct CurrentOrganizationResponse {
    pub organization: Option<OrganizationResponse>,
}

/// GET /api/organization — The organization this request resolved to. Anonymous allowed.
pub async fn show(tenant: TenantContext) -> Json<CurrentOrganizationResponse> {
    Json(CurrentOrganizationResponse {
        organization: tenant.organization().map(OrganizationResponse::from),
    })
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/organization", get(show))
}
