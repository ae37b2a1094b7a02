use axum::{middleware, Router};
use sqlx::SqlitePool;

/// Human-readable application name, used in logs.
pub const APP_NAME: &str = "Credtrack";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: config::Config,
}

/// Tenant-scoped API routes. Every request here is authenticated from its
/// session (if any), then tenant-resolved, before a handler runs.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(features::account::routes())
        .merge(features::organization::routes())
        .merge(features::platform::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), tenant::resolve_tenant))
        .route_layer(middleware::from_fn_with_state(state, session::authenticate))
}

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod features;
pub mod role_gate;
pub mod session;
pub mod tenant;
