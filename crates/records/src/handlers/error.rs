use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stash_core::record::RecordError;
use stash_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::models::ErrorResponse;

/// Errors returned by the item handlers.
///
/// Every variant renders as `{"detail": "..."}`. Backend faults are logged
/// and answered with a generic detail.
#[derive(Debug)]
pub enum AppError {
    /// The request body is missing required attributes (400).
    Validation(String),
    /// The requested item does not exist (404).
    NotFound(String),
    /// The request body is not a JSON object (422).
    Unprocessable(String),
    /// No route matches the request (404) or the method is not allowed (405).
    Route(StatusCode),
    /// The backend call failed (5xx).
    Repository(RepositoryError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Route(status) => *status,
            Self::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Unprocessable(msg) => {
                tracing::warn!(status = %status, detail = %msg, "API error");
                msg
            }
            Self::Route(_) => canonical_reason(status),
            Self::Repository(err) => {
                tracing::error!(status = %status, error = %err, "Repository error");
                canonical_reason(status)
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

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

impl From<RecordError> for AppError {
    fn from(_: RecordError) -> Self {
        Self::Validation("Invalid item data".to_string())
    }
}
