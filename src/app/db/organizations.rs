use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::OrganizationId;

/// Database row for organizations table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Organization {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub is_active: bool,
}

impl Organization {
    pub fn organization_id(&self) -> OrganizationId {
        OrganizationId::new(self.id)
    }
}

/// Data structure for inserting a new organization.
pub struct NewOrganization {
    pub slug: String,
    pub name: String,
}

/// List every organization, active or not, ordered by name.
pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Organization>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Organization>(
        "SELECT id, slug, name, is_active FROM organizations ORDER BY name, id",
    )
    .fetch_all(executor)
    .await
}

/// Insert a new organization. Returns its ID.
pub async fn insert<'e, E>(
    executor: E,
    organization: &NewOrganization,
) -> Result<OrganizationId, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO organizations (slug, name, is_active, created_at) VALUES (?, ?, 1, ?) RETURNING id",
    )
    .bind(&organization.slug)
    .bind(&organization.name)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(OrganizationId::new(id))
}

/// Soft-disable or re-enable an organization.
pub async fn set_active<'e, E>(
    executor: E,
    organization_id: OrganizationId,
    is_active: bool,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE organizations SET is_active = ? WHERE id = ?")
        .bind(is_active)
        .bind(organization_id.get())
        .execute(executor)
        .await?;
    Ok(())
}
