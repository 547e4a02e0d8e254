use async_trait::async_trait;
use bytes::Bytes;

use super::Result;

/// Read-only access to a bucket of opaque objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches the full content of the object stored under `key`.
    ///
    /// Keys are matched exactly, slashes included. Returns `None` when no
    /// object exists at that key.
    async fn get_object(&self, key: &str) -> Result<Option<Bytes>>;
}
