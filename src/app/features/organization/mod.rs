mod current;
mod members;

use axum::Router;

use crate::app::AppState;

/// Routes scoped to the resolved organization.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(current::routes())
        .merge(members::routes())
}
