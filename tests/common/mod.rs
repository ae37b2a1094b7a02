#![allow(dead_code)]

use axum::body::Body;
use credtrack::app::{
    config::Config,
    db,
    domain::{Hostname, OrganizationId, Role, UserId},
    AppState,
};
use credtrack::create_router;
use http_body_util::BodyExt;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use time::{Duration, OffsetDateTime};
use tower::ServiceExt;

/// Single-connection pool so every query sees the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn test_router(pool: SqlitePool) -> axum::Router {
    let state = AppState {
        db: pool,
        config: Config::for_tests(),
    };
    create_router(state)
}

/// Create an active organization with one active domain.
pub async fn create_org_with_domain(pool: &SqlitePool, slug: &str, domain: &str) -> OrganizationId {
    let org_id = db::organizations::insert(
        pool,
        &db::NewOrganization {
            slug: slug.to_string(),
            name: format!("{slug} Inc"),
        },
    )
    .await
    .unwrap();
    add_domain(pool, org_id, domain).await;
    org_id
}

/// Bind another active domain to an organization. Returns the domain row ID.
pub async fn add_domain(pool: &SqlitePool, org_id: OrganizationId, domain: &str) -> i64 {
    db::organization_domains::insert(
        pool,
        &db::organization_domains::NewOrganizationDomain {
            organization_id: org_id,
            domain: Hostname::new(domain).unwrap(),
        },
    )
    .await
    .unwrap()
}

pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    role: Role,
    organization_id: Option<OrganizationId>,
) -> UserId {
    db::users::insert(
        pool,
        &db::NewUser {
            email: email.to_string(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            role,
            organization_id,
        },
    )
    .await
    .unwrap()
}

/// Create user, open a session, return cookie header for authenticated requests.
pub async fn authenticated_cookie(
    pool: &SqlitePool,
    email: &str,
    role: Role,
    organization_id: Option<OrganizationId>,
) -> String {
    let user_id = create_user(pool, email, role, organization_id).await;
    let expires_at = OffsetDateTime::now_utc() + Duration::days(30);
    let session_id = db::sessions::create(pool, user_id, expires_at).await.unwrap();
    format!("session_id={}", session_id.as_str())
}

/// GET request with the given headers.
pub fn get_request(uri: &str, headers: &[(&str, &str)]) -> http::Request<Body> {
    let mut builder = http::Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Send a request, return status and JSON body.
pub async fn send(app: &axum::Router, request: http::Request<Body>) -> (http::StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
