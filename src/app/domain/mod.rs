pub mod hostname;
pub mod organization_id;
pub mod principal;
pub mod role;
pub mod session_id;
pub mod user_id;

pub use hostname::Hostname;
pub use organization_id::OrganizationId;
pub use principal::Principal;
pub use role::Role;
pub use session_id::SessionId;
pub use user_id::UserId;
