//! Request body extractor for item payloads.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

use super::AppError;

/// JSON request body.
///
/// Unlike `axum::Json`, a request without a `content-type` header is parsed
/// as JSON too. Any other non-JSON content type, and any body that does not
/// deserialize into `T`, is rejected with 422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

fn is_json_or_absent(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_or_absent(req.headers()) {
            return Err(AppError::Unprocessable(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Unprocessable(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| {
                AppError::Unprocessable(format!("Failed to parse the request body as JSON: {err}"))
            })
    }
}
