mod common;

use credtrack::app::{db, domain::Role};
use http::StatusCode;

use crate::common::*;

mod headers {
    use super::*;

    #[tokio::test]
    async fn override_header_resolves_normalized_host() {
        let pool = test_pool().await;
        let org_id = create_org_with_domain(&pool, "acme", "tenant.example.com").await;
        let app = test_router(pool);

        let request = get_request(
            "/api/organization",
            &[("x-tenant-domain", "Tenant.Example.COM:8443")],
        );
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["organization"]["id"], org_id.get());
        assert_eq!(body["organization"]["slug"], "acme");
    }

    #[tokio::test]
    async fn origin_header_resolves_when_no_override() {
        let pool = test_pool().await;
        let org_id = create_org_with_domain(&pool, "acme", "hr.acme.test").await;
        let app = test_router(pool);

        let request = get_request("/api/organization", &[("origin", "https://HR.acme.test:5173")]);
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["organization"]["id"], org_id.get());
    }

    #[tokio::test]
    async fn missing_headers_is_bad_request() {
        let pool = test_pool().await;
        create_org_with_domain(&pool, "acme", "hr.acme.test").await;
        let app = test_router(pool);

        let (status, body) = send(&app, get_request("/api/organization", &[])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Tenant context is required.");
    }

    #[tokio::test]
    async fn override_takes_precedence_over_origin() {
        let pool = test_pool().await;
        create_org_with_domain(&pool, "acme", "hr.acme.test").await;
        let app = test_router(pool);

        let request = get_request(
            "/api/organization",
            &[("x-tenant-domain", "elsewhere.test"), ("origin", "https://hr.acme.test")],
        );
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "This tenant is not authorized.");
    }

    #[tokio::test]
    async fn bare_hostname_origin_resolves() {
        let pool = test_pool().await;
        let org_id = create_org_with_domain(&pool, "acme", "tenant.example.com").await;
        let app = test_router(pool);

        for origin in ["tenant.example.com", "Tenant.Example.com:8443"] {
            let (status, body) = send(&app, get_request("/api/organization", &[("origin", origin)])).await;

            assert_eq!(status, StatusCode::OK, "origin {origin}");
            assert_eq!(body["organization"]["id"], org_id.get());
        }
    }

    #[tokio::test]
    async fn null_origin_is_bad_request() {
        let pool = test_pool().await;
        create_org_with_domain(&pool, "acme", "hr.acme.test").await;
        let app = test_router(pool);

        let (status, body) = send(&app, get_request("/api/organization", &[("origin", "null")])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Tenant context is required.");
    }

    #[tokio::test]
    async fn hostless_override_does_not_fall_back_to_origin() {
        let pool = test_pool().await;
        create_org_with_domain(&pool, "acme", "hr.acme.test").await;
        let app = test_router(pool);

        let request = get_request(
            "/api/organization",
            &[("x-tenant-domain", ":8080"), ("origin", "https://hr.acme.test")],
        );
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Tenant context is required.");
    }

    #[tokio::test]
    async fn unknown_host_is_forbidden() {
        let pool = test_pool().await;
        let app = test_router(pool);

        let request = get_request("/api/organization", &[("origin", "https://nobody.test")]);
        let (status, _) = send(&app, request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}

mod activity {
    use super::*;

    #[tokio::test]
    async fn inactive_domain_is_forbidden_even_for_active_org() {
        let pool = test_pool().await;
        let org_id = create_org_with_domain(&pool, "acme", "live.acme.test").await;
        let old_domain = add_domain(&pool, org_id, "old.acme.test").await;
        db::organization_domains::set_active(&pool, old_domain, false).await.unwrap();
        let app = test_router(pool);

        let (status, body) = send(
            &app,
            get_request("/api/organization", &[("x-tenant-domain", "old.acme.test")]),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "This tenant is not authorized.");

        let (status, _) = send(
            &app,
            get_request("/api/organization", &[("x-tenant-domain", "live.acme.test")]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn inactive_organization_is_forbidden() {
        let pool = test_pool().await;
        let org_id = create_org_with_domain(&pool, "acme", "hr.acme.test").await;
        db::organizations::set_active(&pool, org_id, false).await.unwrap();
        let app = test_router(pool);

        let (status, body) = send(
            &app,
            get_request("/api/organization", &[("x-tenant-domain", "hr.acme.test")]),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "This tenant is not authorized.");
    }
}

mod isolation {
    use super::*;

    #[tokio::test]
    async fn user_from_other_org_is_mismatch() {
        let pool = test_pool().await;
        let home = create_org_with_domain(&pool, "home", "home.test").await;
        create_org_with_domain(&pool, "other", "other.test").await;
        let cookie = authenticated_cookie(&pool, "rec@home.test", Role::Recruiter, Some(home)).await;
        let app = test_router(pool);

        let request = get_request("/api/me", &[("cookie", cookie.as_str()), ("x-tenant-domain", "other.test")]);
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "You do not belong to this tenant.");
    }

    #[tokio::test]
    async fn user_from_same_org_is_bound() {
        let pool = test_pool().await;
        let home = create_org_with_domain(&pool, "home", "home.test").await;
        let cookie = authenticated_cookie(&pool, "rec@home.test", Role::Recruiter, Some(home)).await;
        let app = test_router(pool);

        let request = get_request("/api/me", &[("cookie", cookie.as_str()), ("origin", "https://home.test")]);
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "recruiter");
        assert_eq!(body["organization_id"], home.get());
        assert_eq!(body["tenant_id"], home.get());
    }

    #[tokio::test]
    async fn user_without_org_is_permitted() {
        let pool = test_pool().await;
        let home = create_org_with_domain(&pool, "home", "home.test").await;
        let cookie = authenticated_cookie(&pool, "pending@home.test", Role::Candidate, None).await;
        let app = test_router(pool);

        let request = get_request("/api/me", &[("cookie", cookie.as_str()), ("x-tenant-domain", "home.test")]);
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["organization_id"], serde_json::Value::Null);
        assert_eq!(body["tenant_id"], home.get());
    }

    #[tokio::test]
    async fn anonymous_request_still_resolves_tenant() {
        let pool = test_pool().await;
        create_org_with_domain(&pool, "home", "home.test").await;
        let app = test_router(pool);

        let (status, _) = send(&app, get_request("/api/organization", &[("x-tenant-domain", "home.test")])).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, get_request("/api/me", &[("x-tenant-domain", "home.test")])).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn invalid_session_is_treated_as_anonymous() {
        let pool = test_pool().await;
        create_org_with_domain(&pool, "home", "home.test").await;
        let app = test_router(pool);

        let request = get_request(
            "/api/me",
            &[("cookie", "session_id=invalid"), ("x-tenant-domain", "home.test")],
        );
        let (status, _) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_session_is_treated_as_anonymous() {
        let pool = test_pool().await;
        let home = create_org_with_domain(&pool, "home", "home.test").await;
        let user_id = create_user(&pool, "old@home.test", Role::Admin, Some(home)).await;
        let expired = time::OffsetDateTime::now_utc() - time::Duration::hours(1);
        let session_id = db::sessions::create(&pool, user_id, expired).await.unwrap();
        let cookie = format!("session_id={}", session_id.as_str());
        let app = test_router(pool);

        let request = get_request("/api/me", &[("cookie", cookie.as_str()), ("x-tenant-domain", "home.test")]);
        let (status, _) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

mod platform_admin {
    use super::*;

    #[tokio::test]
    async fn bypasses_resolution_without_headers() {
        let pool = test_pool().await;
        let cookie = authenticated_cookie(&pool, "root@platform.test", Role::PlatformAdmin, None).await;
        let app = test_router(pool);

        let (status, body) = send(&app, get_request("/api/organization", &[("cookie", cookie.as_str())])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["organization"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn bypasses_resolution_for_unknown_host() {
        let pool = test_pool().await;
        let cookie = authenticated_cookie(&pool, "root@platform.test", Role::PlatformAdmin, None).await;
        let app = test_router(pool);

        let request = get_request("/api/me", &[("cookie", cookie.as_str()), ("x-tenant-domain", "nobody.test")]);
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "platform_admin");
        assert_eq!(body["tenant_id"], serde_json::Value::Null);
    }
}

#[tokio::test]
async fn health_is_not_tenant_scoped() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (status, _) = send(&app, get_request("/health", &[])).await;

    assert_eq!(status, StatusCode::OK);
}
