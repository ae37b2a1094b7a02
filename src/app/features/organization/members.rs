use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::app::{
    db,
    domain::Role,
    error::AppError,
    role_gate::RequireAdmin,
    tenant::TenantContext,
    AppState,
};

/// One row of the member list.
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl MemberResponse {
    /// `None` when the stored role is not a known [`Role`].
    fn from_user(user: db::User) -> Option<Self> {
        let role = user.role.parse::<Role>().ok()?;
        Some(Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
        })
    }
}

/// GET /api/organization/members — Members of the resolved organization (admin tier).
/// Users with an unrecognised stored role are left out.
pub async fn list(
    RequireAdmin(_principal): RequireAdmin,
    tenant: TenantContext,
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberResponse>>, AppError> {
    let organization = tenant.require_organization()?;

    let members = db::users::list_by_organization(&state.db, organization.organization_id())
        .await?
        .into_iter()
        .filter_map(|user| {
            let user_id = user.id;
            let member = MemberResponse::from_user(user);
            if member.is_none() {
                tracing::warn!(user_id, "member has unknown role");
            }
            member
        })
        .collect();

    Ok(Json(members))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/organization/members", get(list))
}
