//! File upload endpoint.

use axum::{
    Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::Response,
    routing::post,
};
use tracing::{error, info};

use filedrop_core::upload::IncomingFile;
use filedrop_shared::AppError;

use crate::AppState;
use crate::error::error_response;
use crate::views::{UploadResultsPage, render_html};

/// Creates the upload routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload))
}

/// POST `/upload`
///
/// Multipart form with a repeatable `file` field. Responds with a rendered
/// results page; per-file failures are reported inline rather than aborting
/// the batch.
async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut files = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_response(&AppError::Validation(format!(
                    "malformed multipart request: {e}"
                )));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or("unnamed")
            .to_string();

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                return error_response(&AppError::Validation(format!(
                    "failed to read file '{original_name}': {e}"
                )));
            }
        };

        files.push(IncomingFile {
            original_name,
            data,
        });
    }

    match state.uploads.handle_upload(files).await {
        Ok(outcomes) => {
            info!(count = outcomes.len(), "upload batch handled");
            render_html(&UploadResultsPage::from_outcomes(&outcomes), StatusCode::OK)
        }
        Err(e) => {
            error!(error = %e, "upload batch failed");
            error_response(&e.into())
        }
    }
}
