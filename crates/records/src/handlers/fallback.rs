//! Responses for requests no route handles.

use axum::http::StatusCode;

use super::AppError;

/// No route matches the path (404).
pub async fn not_found() -> AppError {
    AppError::Route(StatusCode::NOT_FOUND)
}

/// The path exists but not for this method (405).
pub async fn method_not_allowed() -> AppError {
    AppError::Route(StatusCode::METHOD_NOT_ALLOWED)
}
