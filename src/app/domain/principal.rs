use serde::Serialize;

use super::{OrganizationId, Role, UserId};

/// The authenticated actor behind a request, as supplied by the session layer.
/// Already verified; nothing here checks credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: UserId,
    pub role: Role,
    /// `None` for platform admins. A non-platform principal without an
    /// organization passes the tenant check; see `tenant::resolve`.
    pub organization_id: Option<OrganizationId>,
}

impl Principal {
    pub fn new(id: UserId, role: Role, organization_id: Option<OrganizationId>) -> Self {
        Self {
            id,
            role,
            organization_id,
        }
    }
}
