use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use super::organizations::Organization;
use crate::app::domain::{Hostname, OrganizationId};

/// Database row for organization_domains table.
#[derive(Debug, FromRow)]
pub struct OrganizationDomain {
    pub id: i64,
    pub organization_id: i64,
    pub domain: String,
    pub is_active: bool,
}

/// Data structure for binding a hostname to an organization.
pub struct NewOrganizationDomain {
    pub organization_id: OrganizationId,
    pub domain: Hostname,
}

/// Find the organization bound to an active domain row.
///
/// Matches the normalized hostname exactly. Only the domain row's `is_active`
/// is filtered here; the organization's own flag is returned for the caller to check.
pub async fn find_active_organization<'e, E>(
    executor: E,
    hostname: &Hostname,
) -> Result<Option<Organization>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Organization>(
        "SELECT o.id, o.slug, o.name, o.is_active \
         FROM organization_domains d \
         JOIN organizations o ON o.id = d.organization_id \
         WHERE d.domain = ? AND d.is_active = 1",
    )
    .bind(hostname.as_str())
    .fetch_optional(executor)
    .await
}

/// List the active domains of an organization.
pub async fn list_active_for_org<'e, E>(
    executor: E,
    organization_id: OrganizationId,
) -> Result<Vec<OrganizationDomain>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, OrganizationDomain>(
        "SELECT id, organization_id, domain, is_active FROM organization_domains \
         WHERE organization_id = ? AND is_active = 1 ORDER BY domain",
    )
    .bind(organization_id.get())
    .fetch_all(executor)
    .await
}

/// Insert an active domain binding. Returns the row ID.
pub async fn insert<'e, E>(
    executor: E,
    domain: &NewOrganizationDomain,
) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query_scalar(
        "INSERT INTO organization_domains (organization_id, domain, is_active, created_at) \
         VALUES (?, ?, 1, ?) RETURNING id",
    )
    .bind(domain.organization_id.get())
    .bind(domain.domain.as_str())
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Soft-disable or re-enable a domain binding.
pub async fn set_active<'e, E>(executor: E, domain_id: i64, is_active: bool) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE organization_domains SET is_active = ? WHERE id = ?")
        .bind(is_active)
        .bind(domain_id)
        .execute(executor)
        .await?;
    Ok(())
}
