use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::app::{db, error::AppError, role_gate::RequirePlatformAdmin, AppState};

/// An organization with its active domain bindings.
#[derive(Debug, Serialize)]
pub struct PlatformOrganizationResponse {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub is_active: bool,
    pub domains: Vec<String>,
}

/// GET /api/platform/organizations — Every organization across tenants (platform admin).
pub async fn list(
    RequirePlatformAdmin(_principal): RequirePlatformAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<PlatformOrganizationResponse>>, AppError> {
    let organizations = db::organizations::list_all(&state.db).await?;

    let mut response = Vec::with_capacity(organizations.len());
    for org in organizations {
        let domains = db::organization_domains::list_active_for_org(&state.db, org.organization_id())
            .await?
            .into_iter()
            .map(|d| d.domain)
            .collect();
        response.push(PlatformOrganizationResponse {
            id: org.id,
            slug: org.slug,
            name: org.name,
            is_active: org.is_active,
            domains,
        });
    }

    Ok(Json(response))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/platform/organizations", get(list))
}
