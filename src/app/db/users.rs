use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::{OrganizationId, Principal, Role, UserId};

/// Database row for users table.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub organization_id: Option<i64>,
}

impl User {
    /// The principal this user acts as. `None` if the stored role is unknown.
    pub fn principal(&self) -> Option<Principal> {
        let role = self.role.parse::<Role>().ok()?;
        Some(Principal::new(
            UserId::new(self.id),
            role,
            self.organization_id.map(OrganizationId::new),
        ))
    }
}

/// Data structure for inserting a new user.
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub organization_id: Option<OrganizationId>,
}

/// List the users belonging to an organization, ordered by name.
pub async fn list_by_organization<'e, E>(
    executor: E,
    organization_id: OrganizationId,
) -> Result<Vec<User>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "SELECT id, email, name, role, organization_id FROM users \
         WHERE organization_id = ? ORDER BY name, id",
    )
    .bind(organization_id.get())
    .fetch_all(executor)
    .await
}

/// Insert a new user into the database. Returns its ID.
pub async fn insert<'e, E>(executor: E, user: &NewUser) -> Result<UserId, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, name, role, organization_id, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&user.email)
    .bind(&user.name)
    .bind(user.role.to_string())
    .bind(user.organization_id.map(|id| id.get()))
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(UserId::new(id))
}
