pub mod organization_domains;
pub mod organizations;
pub mod sessions;
pub mod users;

pub use organizations::{NewOrganization, Organization};
pub use users::{NewUser, User};
