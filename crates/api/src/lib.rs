//! HTTP layer with Axum routes and HTML templates.
//!
//! This crate provides:
//! - The application router and shared state
//! - Upload / listing / delete endpoints
//! - Typed askama view-models (the core never constructs markup)
//! - Static serving of local uploads

pub mod error;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use filedrop_core::listing::ListingService;
use filedrop_core::storage::StorageBackend;
use filedrop_core::upload::UploadService;
use filedrop_shared::{AppConfig, BackendMode};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend chosen at startup.
    pub backend: Arc<dyn StorageBackend>,
    /// Upload orchestration service.
    pub uploads: Arc<UploadService>,
    /// Listing service.
    pub listing: Arc<ListingService>,
    /// Application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state around a chosen backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, config: AppConfig) -> Self {
        let uploads = Arc::new(UploadService::new(
            backend.clone(),
            config.storage.max_file_size,
        ));
        let listing = Arc::new(ListingService::new(backend.clone()));

        Self {
            backend,
            uploads,
            listing,
            config: Arc::new(config),
        }
    }
}

/// Creates the main application router.
///
/// In local mode the upload directory is additionally served statically
/// under the configured public path, and the forced-download route is
/// mounted.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new().merge(routes::routes());

    if state.config.backend_mode() == BackendMode::Local {
        router = router
            .nest_service(
                state.config.storage.public_base.as_str(),
                ServeDir::new(&state.config.storage.upload_dir),
            )
            .merge(routes::files::local_routes(
                &state.config.storage.download_base,
            ));
    }

    router
        .layer(DefaultBodyLimit::max(state.config.storage.request_body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
