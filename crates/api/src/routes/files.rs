//! Listing pages and local download route.

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;

use filedrop_core::classify;
use filedrop_core::storage::key;
use filedrop_shared::AppError;

use crate::AppState;
use crate::error::error_response;
use crate::views::{ErrorPage, FilesPage, IndexPage, render_html};

/// Creates the page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/files", get(files))
}

/// Creates the local-mode forced-download route.
pub fn local_routes(download_base: &str) -> Router<AppState> {
    Router::new().route(&format!("{download_base}/{{key}}"), get(download))
}

/// GET `/` - upload form.
async fn index() -> Response {
    render_html(&IndexPage, StatusCode::OK)
}

/// GET `/files` - one card per stored file.
async fn files(State(state): State<AppState>) -> Response {
    match state.listing.list_files().await {
        Ok(entries) => render_html(
            &FilesPage::from_entries(&entries, state.backend.name()),
            StatusCode::OK,
        ),
        Err(e) => {
            error!(error = %e, "failed to build file listing");
            render_html(
                &ErrorPage {
                    message: "The file listing is currently unavailable.".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// GET `<download_base>/{key}` - serve a local file with an attachment
/// disposition so browsers save it under its display name.
async fn download(State(state): State<AppState>, Path(storage_key): Path<String>) -> Response {
    if let Err(e) = key::validate_key(&storage_key) {
        return error_response(&e.into());
    }

    let path = state.config.storage.upload_dir.join(&storage_key);
    match tokio::fs::read(&path).await {
        Ok(contents) => {
            let display_name = key::display_name(&storage_key);
            (
                StatusCode::OK,
                [
                    (
                        header::CONTENT_TYPE,
                        classify::content_type_for(display_name).to_string(),
                    ),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{display_name}\""),
                    ),
                ],
                contents,
            )
                .into_response()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error_response(&AppError::NotFound(storage_key))
        }
        Err(e) => {
            error!(key = %storage_key, error = %e, "failed to read stored file");
            error_response(&AppError::Storage("failed to read stored file".to_string()))
        }
    }
}
