//! File fetch handler.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use stash_core::objects::OBJECT_CONTENT_TYPE;

use crate::{handlers::AppError, state::AppState};

/// Return the raw bytes of an object (GET /files/{*file_key}).
///
/// The key is everything after `/files/`, slashes included. The whole object
/// is buffered, and the content type is always plain text.
pub async fn get_file(
    State(state): State<AppState>,
    Path(file_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(%file_key, "Received get file request");

    let Some(content) = state.object_store.get_object(&file_key).await? else {
        tracing::warn!(%file_key, "File not found");
        return Err(AppError::NotFound);
    };

    tracing::debug!(%file_key, size = content.len(), "Serving file");
    Ok(([(header::CONTENT_TYPE, OBJECT_CONTENT_TYPE)], content))
}
