//! File deletion endpoint.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use filedrop_shared::AppError;

use crate::AppState;

/// Request body for deleting a stored file.
#[derive(Debug, Deserialize)]
pub struct DeleteFileRequest {
    /// Storage key to remove.
    pub key: String,
}

/// Creates the delete routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/delete-file", post(delete_file))
}

/// POST `/delete-file`
///
/// Thin pass-through to the backend: `{"key": "..."}` in,
/// `{"success": ...}` out. No cross-backend fallback.
async fn delete_file(
    State(state): State<AppState>,
    Json(payload): Json<DeleteFileRequest>,
) -> Response {
    match state.backend.delete(&payload.key).await {
        Ok(()) => {
            info!(key = %payload.key, backend = state.backend.name(), "deleted file");
            Json(json!({ "success": true })).into_response()
        }
        Err(e) => {
            warn!(key = %payload.key, error = %e, "delete failed");
            let err = AppError::from(e);
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(json!({ "success": false, "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
