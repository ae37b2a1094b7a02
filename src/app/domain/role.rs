use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Principal role. Stored in `users.role` as its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    /// Operates across every tenant. Never bound to an organization.
    PlatformAdmin,
    OrgSuperAdmin,
    Admin,
    Recruiter,
    Candidate,
}

impl Role {
    pub fn is_platform_admin(self) -> bool {
        matches!(self, Role::PlatformAdmin)
    }
}
