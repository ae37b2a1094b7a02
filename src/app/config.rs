use axum::http::HeaderName;

/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. Required.
    pub database_url: String,

    /// Address the HTTP server binds to.
    /// Default: 0.0.0.0:3000
    pub bind_addr: String,

    /// Header that explicitly names the tenant hostname. Wins over `Origin`.
    /// Default: x-tenant-domain
    pub tenant_header: HeaderName,

    /// Name of the cookie carrying the session ID.
    /// Default: session_id
    pub session_cookie: String,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing or malformed.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env")?;

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let tenant_header = std::env::var("TENANT_HEADER")
            .unwrap_or_else(|_| "x-tenant-domain".to_string())
            .to_ascii_lowercase()
            .parse::<HeaderName>()
            .map_err(|_| "TENANT_HEADER must be a valid header name")?;

        let session_cookie = std::env::var("SESSION_COOKIE")
            .unwrap_or_else(|_| "session_id".to_string());

        Ok(Self {
            database_url,
            bind_addr,
            tenant_header,
            session_cookie,
        })
    }

    /// Config for tests. Uses in-memory database URL and default header names.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            tenant_header: HeaderName::from_static("x-tenant-domain"),
            session_cookie: "session_id".to_string(),
        }
    }
}
