//! Filedrop Server
//!
//! Main entry point for the Filedrop upload service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filedrop_api::{AppState, create_router};
use filedrop_core::storage::{LocalDiskBackend, RemoteObjectBackend, StorageBackend};
use filedrop_shared::{AppConfig, BackendMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filedrop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Select the storage backend once; it never changes at runtime.
    let backend: Arc<dyn StorageBackend> = match config.backend_mode() {
        BackendMode::Remote => {
            let s3 = config
                .storage
                .s3
                .as_ref()
                .expect("remote mode implies S3 credentials");
            info!(
                bucket = %s3.bucket,
                region = %s3.region,
                "remote storage credentials found, using S3 backend"
            );
            Arc::new(RemoteObjectBackend::new(
                s3,
                config.storage.preview_ttl_secs,
                config.storage.download_ttl_secs,
            )?)
        }
        BackendMode::Local => {
            info!(
                upload_dir = %config.storage.upload_dir.display(),
                "no remote storage credentials, using local disk backend"
            );
            Arc::new(
                LocalDiskBackend::new(
                    &config.storage.upload_dir,
                    config.storage.public_base.clone(),
                    config.storage.download_base.clone(),
                )
                .await?,
            )
        }
    };

    // Create application state and router
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(backend, config);
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
