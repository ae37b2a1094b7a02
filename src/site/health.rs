use axum::{routing::get, Router};

use crate::app::AppState;

/// GET /health — Liveness probe. Not tenant-scoped.
pub async fn health() -> &'static str {
    "ok"
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
