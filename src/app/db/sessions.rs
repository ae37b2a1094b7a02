use sqlx::SqliteExecutor;
use time::OffsetDateTime;

use super::users::User;
use crate::app::domain::{SessionId, UserId};

/// Create a new session for a user. Returns the session ID.
pub async fn create<'e, E>(
    executor: E,
    user_id: UserId,
    expires_at: OffsetDateTime,
) -> Result<SessionId, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let session_id = SessionId::new();
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query(
        "INSERT INTO sessions (id, user_id, expires_at, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(session_id.as_str())
    .bind(user_id.get())
    .bind(expires_at.unix_timestamp())
    .bind(now)
    .execute(executor)
    .await?;

    Ok(session_id)
}

/// Find the user behind a valid (non-expired) session.
pub async fn find_user<'e, E>(
    executor: E,
    session_id: &SessionId,
) -> Result<Option<User>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query_as::<_, User>(
        "SELECT u.id, u.email, u.name, u.role, u.organization_id \
         FROM sessions s JOIN users u ON u.id = s.user_id \
         WHERE s.id = ? AND s.expires_at > ?",
    )
    .bind(session_id.as_str())
    .bind(now)
    .fetch_optional(executor)
    .await
}
