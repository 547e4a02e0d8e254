use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stash_core::objects::{object_store_error_to_status_code, ObjectStoreError};

use crate::models::ErrorResponse;

/// Errors returned by the file handler.
#[derive(Debug)]
pub enum AppError {
    /// No object exists at the requested key (404).
    NotFound,
    /// No route matches the request (404) or the method is not allowed (405).
    Route(StatusCode),
    /// The object store call failed.
    Store(ObjectStoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "File not found".to_string()),
            Self::Route(status) => (status, canonical_reason(status)),
            Self::Store(err) => {
                let status = StatusCode::from_u16(object_store_error_to_status_code(&err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                tracing::error!(status = %status, error = %err, "Object store error");
                (status, canonical_reason(status))
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

fn canonical_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Internal Server Error")
        .to_string()
}

impl From<ObjectStoreError> for AppError {
    fn from(err: ObjectStoreError) -> Self {
        Self::Store(err)
    }
}
