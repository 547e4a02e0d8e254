//! S3 error mapping.
//!
//! Maps AWS SDK errors to `ObjectStoreError` from `stash_core::objects`.

use std::fmt::Debug;

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use stash_core::objects::ObjectStoreError;

/// Whether a GetObject failure means the key does not exist.
pub fn is_missing_object<R>(err: &SdkError<GetObjectError, R>) -> bool {
    err.as_service_error()
        .is_some_and(GetObjectError::is_no_such_key)
}

/// Map a GetObject SDK error to ObjectStoreError.
pub fn map_get_object_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetObjectError, R>,
) -> ObjectStoreError {
    let err = match err {
        SdkError::DispatchFailure(e) => return map_connection_error(format!("{:?}", e)),
        SdkError::TimeoutError(_) => return map_connection_error("request timed out"),
        err => err,
    };

    match err.into_service_error() {
        GetObjectError::InvalidObjectState(_) => {
            ObjectStoreError::Backend("Object is archived and must be restored first".to_string())
        }
        err => ObjectStoreError::Backend(format!("GetObject failed: {:?}", err)),
    }
}

/// Map a generic connection/config error to ObjectStoreError.
pub fn map_connection_error(err: impl std::fmt::Display) -> ObjectStoreError {
    ObjectStoreError::ConnectionFailed(err.to_string())
}
