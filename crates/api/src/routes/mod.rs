//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod delete;
pub mod files;
pub mod health;
pub mod upload;

/// Creates the router with all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(files::routes())
        .merge(upload::routes())
        .merge(delete::routes())
}
