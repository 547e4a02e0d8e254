use super::ObjectStoreError;

/// Maps an [`ObjectStoreError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Backend` -> 500 (Internal Server Error)
/// - `Body` -> 500 (Internal Server Error)
pub fn object_store_error_to_status_code(error: &ObjectStoreError) -> u16 {
    match error {
        ObjectStoreError::ConnectionFailed(_) => 503,
        ObjectStoreError::Backend(_) => 500,
        ObjectStoreError::Body(_) => 500,
    }
}
